/// MIME tag applied to every synthesis result, regardless of backend.
pub const MIME_MP3: &str = "audio/mp3";

/// A finished audio render. Ownership of the bytes passes to the caller;
/// nothing is cached or shared between calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioResult {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl AudioResult {
    pub fn mp3(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: MIME_MP3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mp3_result_is_tagged_audio_mp3() {
        let audio = AudioResult::mp3(vec![0xff, 0xfb]);
        assert_eq!(audio.mime_type, "audio/mp3");
        assert_eq!(audio.bytes, vec![0xff, 0xfb]);
    }
}
