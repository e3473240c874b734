//! Tests for formatter layout.

mod common;
use common::*;

use sqlscope_core::format_sql;

#[test]
fn clauses_start_new_lines() {
    let lines = lines("select id,name from users where id=1");
    assert_eq!(lines, vec!["SELECT", "  id,", "  name", "FROM users", "WHERE id = 1"]);
}

#[test]
fn output_ends_with_exactly_one_newline() {
    for sql in ["select 1", "select 1;\n\n\n", "  -- only a comment  \n\n", ""] {
        let out = format_sql(sql);
        assert!(out.ends_with('\n'), "{out:?}");
        assert!(!out.ends_with("\n\n"), "{out:?}");
    }
}

#[test]
fn no_trailing_whitespace_on_any_line() {
    let out = format("select a , b from t where x = 1 and y in (1 , 2) order by a");
    for line in out.lines() {
        assert_eq!(line, line.trim_end(), "{out:?}");
    }
}

#[test]
fn group_by_having_order_by_limit_offset() {
    assert_eq!(
        lines("select a, count(*) from t group by a having count(*) > 1 order by a desc limit 10 offset 20"),
        vec![
            "SELECT",
            "  a,",
            "  COUNT(*)",
            "FROM t",
            "GROUP BY a",
            "HAVING COUNT(*) > 1",
            "ORDER BY a DESC",
            "LIMIT 10",
            "OFFSET 20",
        ]
    );
}

#[test]
fn list_items_one_per_line() {
    assert_eq!(
        lines("select a from t order by a, b, c"),
        vec!["SELECT", "  a", "FROM t", "ORDER BY a,", "  b,", "  c"]
    );
}

#[test]
fn update_set_where_returning() {
    assert_eq!(
        lines("update users set name = 'x', age = 3 where id = 1 returning id"),
        vec![
            "UPDATE users",
            "SET name = 'x',",
            "  age = 3",
            "WHERE id = 1",
            "RETURNING id",
        ]
    );
}

#[test]
fn delete_from_is_one_phrase() {
    assert_eq!(
        lines("delete from users where id = 1"),
        vec!["DELETE FROM users", "WHERE id = 1"]
    );
}

#[test]
fn insert_with_multiple_rows() {
    assert_eq!(
        lines("insert into t (a, b) values (1, 'x'), (2, 'y')"),
        vec!["INSERT INTO t(a, b)", "VALUES(1, 'x'),", "  (2, 'y')"]
    );
}

#[test]
fn cte_with_subquery() {
    assert_eq!(
        lines("with recent as (select id from orders) select id from recent"),
        vec![
            "WITH recent AS(",
            "  SELECT id FROM orders)",
            "SELECT",
            "  id",
            "FROM recent",
        ]
    );
}

#[test]
fn nested_subqueries_indent_further() {
    assert_eq!(
        lines("select a from t where a in (select b from u where b in (select c from v))"),
        vec![
            "SELECT",
            "  a",
            "FROM t",
            "WHERE a IN(",
            "  SELECT b FROM u WHERE b IN(",
            "    SELECT c FROM v))",
        ]
    );
}

#[test]
fn set_operations_reset_indent() {
    assert_eq!(
        lines("select a from t intersect select a from u except select a from v"),
        vec![
            "SELECT", "  a", "FROM t", "INTERSECT", "SELECT", "  a", "FROM u", "EXCEPT", "SELECT",
            "  a", "FROM v",
        ]
    );
}

#[test]
fn clause_keywords_inside_parens_stay_inline() {
    assert_eq!(
        lines("select row_number() over (partition by a order by b) from t"),
        vec!["SELECT", "  ROW_NUMBER() OVER(PARTITION BY a ORDER BY b)", "FROM t"]
    );
}

#[test]
fn paren_after_keyword_or_identifier_hugs() {
    assert_eq!(
        lines("select a from t where exists (select 1) and b not in (1, 2)"),
        vec!["SELECT", "  a", "FROM t", "WHERE EXISTS(", "  SELECT 1)", "  AND b NOT IN(1, 2)"]
    );
    assert_eq!(
        lines("select my_fn (a), count (*) from t"),
        vec!["SELECT", "  my_fn(a),", "  COUNT(*)", "FROM t"]
    );
}

#[test]
fn json_arrow_after_number_is_not_glued() {
    assert_eq!(lines("select 1 -> 'a', - ->> 'b'"), vec!["SELECT", "  1 ->'a',", "  - ->>'b'"]);
}

#[test]
fn and_or_inside_parens_stay_inline() {
    assert_eq!(
        lines("select a from t where (x = 1 or y = 2) and z = 3"),
        vec!["SELECT", "  a", "FROM t", "WHERE(x = 1 OR y = 2)", "  AND z = 3"]
    );
}

#[test]
fn case_expression() {
    assert_eq!(
        lines("select case when a > 1 then 'big' else 'small' end as size from t"),
        vec!["SELECT", "  CASE WHEN a > 1 THEN 'big' ELSE 'small' END AS size", "FROM t"]
    );
}

#[test]
fn comments_are_isolated() {
    assert_eq!(
        lines("-- header\nselect a /* inline */ from t"),
        vec!["-- header", "SELECT", "  a", "/* inline */", "FROM t"]
    );
}

#[test]
fn comment_between_list_items_keeps_item_indent() {
    assert_eq!(
        lines("select a,\n-- the b column\nb from t"),
        vec!["SELECT", "  a,", "  -- the b column", "  b", "FROM t"]
    );
}

#[test]
fn multiple_statements() {
    assert_eq!(
        lines("delete from a where x = 1; update b set y = 2 where z = 3;"),
        vec!["DELETE FROM a", "WHERE x = 1;", "UPDATE b", "SET y = 2", "WHERE z = 3;"]
    );
}

#[test]
fn strings_are_kept_verbatim() {
    assert_eq!(
        lines("select 'select  from  where', $$a\n  b$$ from t"),
        vec!["SELECT", "  'select  from  where',", "  $$a", "  b$$", "FROM t"]
    );
}

#[test]
fn postgres_operators() {
    assert_eq!(
        lines("select payload -> 'user' ->> 'id', created_at :: date, a || b from events"),
        vec![
            "SELECT",
            "  payload->'user'->>'id',",
            "  created_at::date,",
            "  a || b",
            "FROM events",
        ]
    );
}

#[test]
fn array_subscripts() {
    assert_eq!(
        lines("select tags [ 1 ] from t"),
        vec!["SELECT", "  tags[1]", "FROM t"]
    );
}

#[test]
fn malformed_sql_still_formats() {
    let out = format("select ( ( from where )) ) , , ;");
    assert!(out.ends_with('\n'));
    assert!(out.starts_with("SELECT"));
}
