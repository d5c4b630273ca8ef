use crate::context::Phrasebook;
use crate::errors::Result;
use crate::render::{render_owned, Rendered};
use crate::schema::{FieldMode, Schema};

/// `<name> from <old> to <new>`, or nothing when both sides render the same.
pub(crate) fn pair_message(name: &str, old: &Rendered, new: &Rendered, phrases: &Phrasebook) -> Option<String> {
    let (old, new) = (old.text(phrases), new.text(phrases));
    if old == new {
        return None;
    }
    Some(phrases.change(name, &old, &new))
}

/// Compare two instances field by field, in declaration order.
pub fn compare<T>(schema: &Schema<T>, old: &T, new: &T, phrases: &Phrasebook) -> Result<Vec<String>> {
    let mut msgs = Vec::new();
    for field in schema.eligible() {
        let desc = field.descriptor();
        let old_raw = field.read(old)?;
        let new_raw = field.read(new)?;
        if old_raw == new_raw {
            continue;
        }

        let msg = match desc.mode {
            FieldMode::Special => Some(phrases.special(&desc.display_name)),
            FieldMode::Compare => {
                let old_shown = render_owned(&old_raw, old, field.transformer())?;
                let new_shown = render_owned(&new_raw, new, field.transformer())?;
                pair_message(&desc.display_name, &old_shown, &new_shown, phrases)
            }
            FieldMode::Skip => None,
        };
        match msg {
            Some(msg) => msgs.push(msg),
            None => tracing::trace!(field = %desc.name, "display values collapsed, no change reported"),
        }
    }
    Ok(msgs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone)]
    struct Item {
        code: u8,
        secret: String,
        note: String,
    }

    fn schema() -> Schema<Item> {
        Schema::builder()
            .field("Code", |i: &Item| i.code)
            .need()
            .trans("编码")
            .change(|i: &Item| if i.code >= 10 { "大" } else { "小" })
            .field("Secret", |i: &Item| i.secret.clone())
            .special()
            .field("Note", |i: &Item| i.note.clone())
            .build()
    }

    fn item(code: u8, secret: &str, note: &str) -> Item {
        Item { code, secret: secret.into(), note: note.into() }
    }

    #[test]
    fn identical_instances_yield_nothing() {
        let a = item(3, "s", "n");
        assert!(compare(&schema(), &a, &a.clone(), &Phrasebook::zh()).unwrap().is_empty());
    }

    #[test]
    fn special_hides_values_and_untagged_ignored() {
        let msgs = compare(&schema(), &item(3, "hunter2", "a"), &item(3, "swordfish", "b"), &Phrasebook::zh()).unwrap();
        assert_eq!(msgs, vec!["Secret 发生了变更".to_string()]);
    }

    #[test]
    fn collapsed_labels_are_suppressed() {
        let msgs = compare(&schema(), &item(11, "", ""), &item(12, "", ""), &Phrasebook::zh()).unwrap();
        assert!(msgs.is_empty());
        let msgs = compare(&schema(), &item(1, "", ""), &item(12, "", ""), &Phrasebook::zh()).unwrap();
        assert_eq!(msgs, vec!["编码 从 小 变更为 大".to_string()]);
    }

    #[test]
    fn zero_side_renders_as_empty() {
        let msgs = compare(&schema(), &item(0, "", ""), &item(5, "", ""), &Phrasebook::zh()).unwrap();
        assert_eq!(msgs, vec!["编码 从 空 变更为 小".to_string()]);
    }

    #[derive(Clone, Default, serde::Serialize)]
    struct Addr {
        city: String,
        zip: u32,
    }

    struct Parcel {
        addr: Addr,
        ref_no: u32,
    }

    #[test]
    fn default_struct_side_renders_as_empty() {
        let schema = Schema::<Parcel>::builder()
            .field("Addr", |p: &Parcel| p.addr.clone())
            .need()
            .build();
        let old = Parcel { addr: Addr::default(), ref_no: 0 };
        let new = Parcel { addr: Addr { city: "杭州".into(), zip: 0 }, ref_no: 0 };
        let msgs = compare(&schema, &old, &new, &Phrasebook::zh()).unwrap();
        assert_eq!(msgs, vec![r#"Addr 从 空 变更为 {"city":"杭州","zip":0}"#.to_string()]);
    }

    #[test]
    fn same_text_from_different_kinds_is_suppressed() {
        // one side labels as text, the other as a number; both display as "1"
        let schema = Schema::<Parcel>::builder()
            .field("Ref", |p: &Parcel| p.ref_no)
            .need()
            .change(|p: &Parcel| if p.ref_no > 100 { serde_json::json!("1") } else { serde_json::json!(1) })
            .build();
        let old = Parcel { addr: Addr::default(), ref_no: 7 };
        let new = Parcel { addr: Addr::default(), ref_no: 700 };
        assert!(compare(&schema, &old, &new, &Phrasebook::zh()).unwrap().is_empty());
    }
}
