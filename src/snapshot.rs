use crate::context::Phrasebook;
use crate::errors::Result;
use crate::render::render_owned;
use crate::schema::{FieldMode, Schema};

/// Describe a lone instance, used for creations and deletions.
///
/// `special` fields still report the generic changed label; their values are
/// never shown.
pub fn snapshot<T>(schema: &Schema<T>, instance: &T, phrases: &Phrasebook) -> Result<Vec<String>> {
    let mut msgs = Vec::new();
    for field in schema.eligible() {
        let desc = field.descriptor();
        match desc.mode {
            FieldMode::Special => msgs.push(phrases.special(&desc.display_name)),
            FieldMode::Compare => {
                let raw = field.read(instance)?;
                let shown = render_owned(&raw, instance, field.transformer())?;
                msgs.push(phrases.value(&desc.display_name, &shown.text(phrases)));
            }
            FieldMode::Skip => {}
        }
    }
    Ok(msgs)
}
