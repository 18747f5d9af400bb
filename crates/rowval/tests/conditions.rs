//! End-to-end tests for row-value conditions across dialects.

use rowval::{col, row, Condition, Dialect, ParamList, QueryPart, Row, Subquery, Value};

fn text(v: &str) -> Value {
    Value::Text(v.to_string())
}

#[test]
fn not_equal_rewrite_with_bind_order() {
    // Tuple (a, b) <> (x, y) on the no-native-inequality dialect: the text
    // mentions the left row once and the bound values stay [a, b, x, y].
    let cond = row(["a", "b"]).not_equal(("x", "y"));
    let (sql, params) = cond.build(Dialect::Db2).unwrap();
    assert_eq!(sql, "not((?, ?) = (?, ?))");
    assert_eq!(
        params.values(),
        &[text("a"), text("b"), text("x"), text("y")]
    );
}

#[test]
fn single_column_in_literal_list() {
    // Tuple (a) IN [(1), (2), (3)] on a generic dialect.
    let cond = row([col("a")]).in_list([row([1i32]), row([2i32]), row([3i32])]);
    let (sql, params) = cond.build(Dialect::Sqlite).unwrap();
    assert_eq!(sql, "(a) in ((?), (?), (?))");
    assert_eq!(
        params.values(),
        &[Value::Int(1), Value::Int(2), Value::Int(3)]
    );
}

#[test]
fn postgres_placeholders_number_across_sides() {
    let cond = Row::from((col("a"), 1i32)).equal((col("b"), 2i32));
    let (sql, params) = cond.build(Dialect::Postgres).unwrap();
    assert_eq!(sql, "(a, $1) = (b, $2)");
    assert_eq!(params.values(), &[Value::Int(1), Value::Int(2)]);
}

#[test]
fn equal_is_never_rewritten() {
    for dialect in [Dialect::Postgres, Dialect::Db2, Dialect::MySql] {
        let (sql, _) = row([col("a"), col("b")])
            .equal((col("x"), col("y")))
            .build(dialect)
            .unwrap();
        assert!(sql.contains("="));
        assert!(!sql.starts_with("not"));
    }
}

#[test]
fn membership_against_subquery() {
    let sq = Subquery::new("select x, y from t where status = ").bound("active");
    let cond = row([col("a"), col("b")]).not_in_select(sq);

    let (sql, params) = cond.build(Dialect::Postgres).unwrap();
    assert_eq!(sql, "(a, b) not in (select x, y from t where status = $1)");
    assert_eq!(params.values(), &[text("active")]);

    // The parenthesize-subquery dialect adds exactly one extra pair.
    let (sql, _) = cond.build(Dialect::Oracle).unwrap();
    assert_eq!(
        sql,
        "(a, b) not in ((select x, y from t where status = ?))"
    );
}

#[test]
fn composed_tree_binds_in_traversal_order() {
    let cond = row([col("a")])
        .equal(row([1i32]))
        .and(row([col("b")]).in_list([row([2i32]), row([3i32])]))
        .and(row([col("c")]).not_equal(row([4i32])));

    let (sql, params) = cond.build(Dialect::Postgres).unwrap();
    assert_eq!(
        sql,
        "(a) = ($1) and (b) in (($2), ($3)) and (c) <> ($4)"
    );
    assert_eq!(
        params.values(),
        &[
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Int(4)
        ]
    );
}

#[test]
fn total_bound_count_matches_arity_sum() {
    let left = row([1i32, 2i32, 3i32]);
    let right = row([4i32, 5i32, 6i32]);
    for dialect in [Dialect::Postgres, Dialect::Db2, Dialect::Oracle] {
        let (_, params) = left.clone().not_equal(right.clone()).build(dialect).unwrap();
        assert_eq!(params.len(), 6);
    }
}

#[test]
fn build_twice_yields_identical_output() {
    let cond: Condition = row([col("a"), 1i64.into()]).in_list([
        Row::from((col("x"), 2i64)),
        Row::from((col("y"), 3i64)),
    ]);
    let first: (String, ParamList) = cond.build(Dialect::Postgres).unwrap();
    let second = cond.build(Dialect::Postgres).unwrap();
    assert_eq!(first, second);
}

#[test]
fn arity_mismatch_is_not_validated_here() {
    // Fail-late by design: the mismatch surfaces at the database, not here.
    let cond = row([col("a"), col("b")]).equal(row([col("x")]));
    let (sql, _) = cond.build(Dialect::Postgres).unwrap();
    assert_eq!(sql, "(a, b) = (x)");
}

#[test]
fn malformed_column_error_propagates_through_the_tree() {
    let cond = row([col("ok")])
        .equal(row([col("ok2")]))
        .and(row([col("bad column")]).equal(row([col("x")])));
    let err = cond.build(Dialect::Postgres).unwrap_err();
    assert!(err.to_string().contains("Identifier"));
}

#[test]
fn subquery_flag_scoped_to_membership_rendering() {
    let cond = row([col("a")]).in_select(Subquery::new("select x from t"));
    let mut ctx = rowval::RenderContext::new(Dialect::Postgres);
    assert!(!ctx.in_subquery());
    cond.render(&mut ctx).unwrap();
    assert!(!ctx.in_subquery());
    assert_eq!(ctx.finish(), "(a) in (select x from t)");
}
