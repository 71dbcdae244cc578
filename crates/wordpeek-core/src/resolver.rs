use wordpeek_types::{PartOfSpeech, WordInfoRecord};

/// Tab to display for a record.
///
/// An explicit choice is returned as is, even when that tab has no content.
/// Otherwise the first code in [`PartOfSpeech::ALL`] present in the record
/// wins. `None` means there is nothing to show yet.
pub fn effective_pos(
    record: Option<&WordInfoRecord>,
    explicit: Option<PartOfSpeech>,
) -> Option<PartOfSpeech> {
    if explicit.is_some() {
        return explicit;
    }

    let record = record?;
    PartOfSpeech::ALL.into_iter().find(|pos| record.has(*pos))
}
