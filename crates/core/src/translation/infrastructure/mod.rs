pub mod gtx_translator;
