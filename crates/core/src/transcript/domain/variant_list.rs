use super::variant::TranscriptVariant;

/// Enumeration result for one video: every available transcript track,
/// partitioned by origin, in the order the provider listed them.
pub struct VariantList {
    manual: Vec<Box<dyn TranscriptVariant>>,
    generated: Vec<Box<dyn TranscriptVariant>>,
}

impl VariantList {
    pub fn new(
        manual: Vec<Box<dyn TranscriptVariant>>,
        generated: Vec<Box<dyn TranscriptVariant>>,
    ) -> Self {
        Self { manual, generated }
    }

    pub fn manual(&self) -> &[Box<dyn TranscriptVariant>] {
        &self.manual
    }

    pub fn generated(&self) -> &[Box<dyn TranscriptVariant>] {
        &self.generated
    }

    pub fn len(&self) -> usize {
        self.manual.len() + self.generated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manual.is_empty() && self.generated.is_empty()
    }

    /// All variants, manual first, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn TranscriptVariant> {
        self.manual
            .iter()
            .chain(self.generated.iter())
            .map(|v| v.as_ref())
    }
}
