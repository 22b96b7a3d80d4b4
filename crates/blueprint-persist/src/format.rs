use blueprint_core::phase::Phase;

/// Header line that opens every phase section, e.g. `#dig label(dig)`.
pub fn modeline(phase: Phase) -> String {
    format!("#{} label({})", phase.name(), phase.name())
}
