#[cfg(test)]
mod tests {
    use crate::fixtures::{BaseModel, TestModel, Uint8Slice, test_model};
    use crate::model::{FieldMeta, FieldValue, ModelValues, SqlModel};
    use crate::value::SqlValue;
    use crate::sql_model;
    use pretty_assertions::assert_eq;

    #[test]
    fn fields_keep_declaration_order_and_embedding() {
        let names: Vec<&str> = TestModel::FIELDS.iter().map(|f| f.rust).collect();
        assert_eq!(names, vec!["base", "name", "foobar", "custom_field"]);

        let base = &TestModel::FIELDS[0];
        assert!(base.is_embedded());
        assert_eq!(base.tag, "");
        assert_eq!(base.embedded, Some(BaseModel::FIELDS));

        assert_eq!(
            TestModel::FIELDS[3],
            FieldMeta::new("custom_field", "custom_field", "column:custom_field")
        );
    }

    #[derive(Clone, Default)]
    struct Renamed {
        create_time: i64,
    }

    sql_model! {
        impl Renamed {
            create_time: { tag: "", orig: "CreateTime", valuer: false },
        }
    }

    #[test]
    fn orig_overrides_original_name() {
        assert_eq!(Renamed::FIELDS[0].orig, "CreateTime");
        assert_eq!(Renamed::FIELDS[0].rust, "create_time");
        let v = Renamed { create_time: 5 };
        assert!(matches!(
            v.field_value("create_time"),
            Some(FieldValue::Raw(SqlValue::I64(5)))
        ));
    }

    #[test]
    fn field_value_kinds() {
        let m = test_model(1, 2, "n", &[9]);
        assert!(matches!(m.field_value("base"), Some(FieldValue::Embedded(_))));
        assert!(matches!(
            m.field_value("name"),
            Some(FieldValue::Raw(SqlValue::String(ref s))) if s == "n"
        ));
        match m.field_value("custom_field") {
            Some(FieldValue::Valuer(Ok(v))) => assert_eq!(v, SqlValue::from("9")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(m.field_value("nope").is_none());
    }

    #[test]
    fn embedded_value_resolves_nested_fields() {
        let m = test_model(7, 8, "n", &[]);
        let Some(FieldValue::Embedded(inner)) = m.field_value("base") else {
            panic!("base should be embedded");
        };
        assert!(matches!(
            inner.field_value("id"),
            Some(FieldValue::Raw(SqlValue::U64(7)))
        ));
    }

    #[derive(Clone, Default)]
    struct Tagged {
        tags: Uint8Slice,
        note: String,
    }

    sql_model! {
        impl Tagged {
            tags: { tag: "column:tags", valuer: true, orig: "Tags" },
            note: { tag: "column:note", valuer: false, orig: "Note", },
        }
    }

    #[test]
    fn valuer_may_come_before_orig() {
        assert_eq!(
            Tagged::FIELDS,
            [
                FieldMeta::new("tags", "Tags", "column:tags"),
                FieldMeta::new("note", "Note", "column:note"),
            ]
        );
        let v = Tagged {
            tags: Uint8Slice(vec![1, 2]),
            note: "n".to_string(),
        };
        match v.field_value("tags") {
            Some(FieldValue::Valuer(Ok(s))) => assert_eq!(s, SqlValue::from("1,2")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            v.field_value("note"),
            Some(FieldValue::Raw(SqlValue::String(ref s))) if s == "n"
        ));
    }

    #[derive(Clone, Default)]
    struct Empty;

    sql_model! {
        impl Empty {}
    }

    #[test]
    fn empty_model_has_no_fields() {
        assert!(Empty::FIELDS.is_empty());
        assert!(Empty.field_value("x").is_none());
    }
}
