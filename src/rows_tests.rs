#[cfg(test)]
mod tests {
    use crate::rows::{MockRows, RowsError};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_row_chains_in_order() {
        let rows = MockRows::new(["id", "name"])
            .add_row([SqlValue::I64(1), SqlValue::from("a")])
            .add_row([SqlValue::I64(2), SqlValue::from("b")]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.get(1, "name"), Some(&SqlValue::from("b")));
        assert_eq!(rows.get(2, "name"), None);
        assert_eq!(rows.get(0, "missing"), None);

        let ids: Vec<&SqlValue> = rows.iter().map(|r| &r[0]).collect();
        assert_eq!(ids, vec![&SqlValue::I64(1), &SqlValue::I64(2)]);
    }

    #[test]
    fn try_add_row_rejects_wrong_arity() {
        let mut rows = MockRows::new(["id", "name"]);
        let err = rows.try_add_row([1_i64]).unwrap_err();
        assert_eq!(err, RowsError::ColumnCountMismatch { expected: 2, got: 1 });
        assert!(rows.is_empty());
    }

    #[test]
    #[should_panic(expected = "expected 2 values to match columns, got 3")]
    fn add_row_panics_on_wrong_arity() {
        let _ = MockRows::new(["id", "name"]).add_row([1_i64, 2, 3]);
    }

    #[test]
    fn add_rows_stops_at_first_bad_row() {
        let mut rows = MockRows::new(["a"]);
        let res = rows.add_rows(vec![vec![1_i64], vec![2, 3], vec![4]]);
        assert!(res.is_err());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn from_csv_parses_bytes_and_null() {
        let rows = MockRows::from_csv(
            ["id", "title"],
            "
            1, hello
            2, null
            ",
        )
        .unwrap();
        assert_eq!(
            rows.rows(),
            [
                vec![SqlValue::Bytes(b"1".to_vec()), SqlValue::Bytes(b"hello".to_vec())],
                vec![SqlValue::Bytes(b"2".to_vec()), SqlValue::Null],
            ]
        );
    }

    #[test]
    fn from_csv_reports_arity() {
        let err = MockRows::from_csv(["id"], "1,2").unwrap_err();
        assert_eq!(err, RowsError::ColumnCountMismatch { expected: 1, got: 2 });
    }
}
