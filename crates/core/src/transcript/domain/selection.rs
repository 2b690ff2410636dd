use super::variant::TranscriptVariant;
use super::variant_list::VariantList;

/// One tier of the track-selection policy.
///
/// The policy is kept as an ordered slice of named rules rather than nested
/// branching so the priority order itself can be asserted in tests.
pub struct SelectionRule {
    pub name: &'static str,
    pub select: for<'a> fn(&'a VariantList, &str) -> Option<&'a dyn TranscriptVariant>,
}

/// Priority order: an exact-language manual track beats any manual track,
/// which beats any auto-generated track. Language mismatches in the lower
/// tiers are tolerated; translation happens downstream.
pub const SELECTION_RULES: &[SelectionRule] = &[
    SelectionRule {
        name: "manual-exact-language",
        select: manual_exact_language,
    },
    SelectionRule {
        name: "first-manual",
        select: first_manual,
    },
    SelectionRule {
        name: "first-auto-generated",
        select: first_auto_generated,
    },
];

/// Evaluate the rules in order; the first hit wins. Returns the winning
/// rule's name alongside the variant so callers can log the decision.
pub fn select_variant<'a>(
    variants: &'a VariantList,
    target_language: &str,
) -> Option<(&'static str, &'a dyn TranscriptVariant)> {
    SELECTION_RULES
        .iter()
        .find_map(|rule| (rule.select)(variants, target_language).map(|v| (rule.name, v)))
}

fn manual_exact_language<'a>(
    variants: &'a VariantList,
    target_language: &str,
) -> Option<&'a dyn TranscriptVariant> {
    variants
        .manual()
        .iter()
        .find(|v| v.language_code() == target_language)
        .map(|v| v.as_ref())
}

fn first_manual<'a>(variants: &'a VariantList, _: &str) -> Option<&'a dyn TranscriptVariant> {
    variants.manual().first().map(|v| v.as_ref())
}

fn first_auto_generated<'a>(
    variants: &'a VariantList,
    _: &str,
) -> Option<&'a dyn TranscriptVariant> {
    variants.generated().first().map(|v| v.as_ref())
}
