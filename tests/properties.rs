mod common;

use change_info::{compare, make_info, snapshot, Phrasebook};
use common::{schema, Student};
use proptest::prelude::*;

fn arb_student() -> impl Strategy<Value = Student> {
    ("[a-z]{0,6}", 0..4i32, "[A-Z]{0,4}", 0..4i32, 0..200i32).prop_map(|(name, age, class, sex, weight)| Student {
        name,
        age,
        class,
        sex,
        weight,
    })
}

proptest! {
    #[test]
    fn self_comparison_reports_nothing(a in arb_student()) {
        let s = schema();
        prop_assert_eq!(make_info(&s, Some(&a), Some(&a.clone()), &[]).unwrap(), "无任何关键数据发生变更");
    }

    #[test]
    fn special_field_never_leaks_values(a in arb_student(), b in arb_student()) {
        let s = schema();
        let msgs = compare(&s, &a, &b, &Phrasebook::zh()).unwrap();
        let class_msgs: Vec<_> = msgs.iter().filter(|m| m.starts_with("班级")).collect();
        if a.class == b.class {
            prop_assert!(class_msgs.is_empty());
        } else {
            prop_assert_eq!(class_msgs, vec!["班级 发生了变更"]);
        }
    }

    #[test]
    fn untagged_field_never_appears(a in arb_student(), b in arb_student()) {
        let s = schema();
        let p = Phrasebook::zh();
        let all = compare(&s, &a, &b, &p).unwrap().into_iter().chain(snapshot(&s, &a, &p).unwrap());
        for msg in all {
            prop_assert!(!msg.starts_with("体重") && !msg.starts_with("Weight"));
        }
    }

    #[test]
    fn messages_follow_declaration_order(a in arb_student(), b in arb_student()) {
        let s = schema();
        let order = ["姓名", "Age", "班级", "性别"];
        let msgs = compare(&s, &a, &b, &Phrasebook::zh()).unwrap();
        let positions: Vec<usize> = msgs
            .iter()
            .map(|m| order.iter().position(|label| m.starts_with(&format!("{label} "))).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_age_always_renders_empty(a in arb_student()) {
        let s = schema();
        let zeroed = Student { age: 0, ..a };
        let msgs = snapshot(&s, &zeroed, &Phrasebook::zh()).unwrap();
        prop_assert!(msgs.contains(&"Age 值为 空 ".to_string()));
    }

    #[test]
    fn sex_codes_without_labels_never_reported(x in 3..100i32, y in 3..100i32) {
        let s = schema();
        let a = Student { name: String::new(), age: 0, class: String::new(), sex: x, weight: 0 };
        let b = Student { sex: y, ..a.clone() };
        prop_assert!(compare(&s, &a, &b, &Phrasebook::zh()).unwrap().is_empty());
    }
}
