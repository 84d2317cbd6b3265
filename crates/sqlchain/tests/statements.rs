use sqlchain::prelude::*;
use sqlchain::{Element, Fetch, StatementKind, ValueArg};

#[test]
fn select_through_free_function() -> BuildResult<()> {
    let mut q = select(["id", "email"])?;
    q.from(["users"])?
        .and_where("status", "=", "active")
        .or_where("role", "=", "admin")?;

    assert_eq!(
        q.select_statement(),
        "SELECT id, email FROM users WHERE status=$1 OR role=$2;"
    );
    assert_eq!(q.bound_values(), &[Value::from("active"), Value::from("admin")]);
    assert_eq!(q.params_ref().len(), 2);
    Ok(())
}

#[test]
fn five_predicates_pair_up() -> BuildResult<()> {
    let mut q = select(Vec::<&str>::new())?;
    q.from(["t"])?
        .and_where("a", "=", 1)
        .and_where("b", "=", 2)
        .or_where("c", "=", 3)?
        .and_where("d", "=", 4)
        .or_where("e", "=", 5)?;

    assert_eq!(
        q.select_statement(),
        "SELECT * FROM t WHERE (a=$1 AND b=$2) OR (c=$3 AND d=$4) OR e=$5;"
    );
    Ok(())
}

#[test]
fn four_predicates_pair_up() -> BuildResult<()> {
    let mut q = Query::select_all();
    q.from(["t"])?
        .and_where("a", "=", 1)
        .or_where("b", "=", 2)?
        .and_where("c", "=", 3)
        .and_where("d", "=", 4);

    assert_eq!(
        q.select_statement(),
        "SELECT * FROM t WHERE (a=$1 OR b=$2) AND (c=$3 AND d=$4);"
    );
    Ok(())
}

#[test]
fn select_pages_and_sorts() -> BuildResult<()> {
    let mut q = select([("u.id", "id"), ("u.name", "name")])?;
    q.from([("users", "u")])?
        .order_by_desc("u.created_at")
        .fetch((25u64, 50));

    assert_eq!(q.fetch_limit(), Some(Fetch::Page { count: 25, offset: 50 }));
    assert_eq!(
        q.select_statement(),
        "SELECT u.id AS id, u.name AS name FROM users AS u ORDER BY u.created_at DESC LIMIT 25 OFFSET 50;"
    );
    assert!(q.bound_values().is_empty());
    Ok(())
}

#[test]
fn build_select_snapshot_is_independent() -> BuildResult<()> {
    let mut q = select(["id"])?;
    q.from(["users"])?.and_where("id", "=", 7);
    let built = q.build_select();

    q.and_where("deleted", "=", false);
    let rebuilt = q.build_select();

    assert_eq!(built.sql, "SELECT id FROM users WHERE id=$1;");
    assert_eq!(built.params, vec![Value::Int(7)]);
    assert_eq!(rebuilt.sql, "SELECT id FROM users WHERE id=$1 AND deleted=$2;");
    assert_eq!(rebuilt.params, vec![Value::Int(7), Value::Bool(false)]);
    Ok(())
}

#[test]
fn rejected_inputs_report_messages() {
    let cases: Vec<(Vec<Element>, &str)> = vec![
        (
            vec![Element::from(["col", "alias", "extra"])],
            "You can not add more than 1 alias to a select element",
        ),
        (
            vec![Element::from(("col", "*"))],
            "You can not use * as an alias for a select element",
        ),
        (
            vec![Element::from(("col", ""))],
            "You can not use an empty string as an alias",
        ),
        (
            vec![Element::from("")],
            "You can not use an empty string as a select element",
        ),
        (
            vec![Element::from(vec![vec!["col"]])],
            "You can not use empty or nested arrays as select elements",
        ),
    ];

    for (columns, message) in cases {
        let err = select(columns).unwrap_err();
        assert!(err.is_select_error(), "{err:?}");
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn rejected_sort_direction_names_it() {
    let mut q = Query::select_all();
    let err = q.group_by([("town", "sideways")]).unwrap_err();
    assert_eq!(err, BuildError::InvalidSortDirection("sideways".to_string()));
    assert!(err.to_string().contains("sideways"));
    assert!(q.groups().is_empty());
}

#[test]
fn insert_many_rows() -> BuildResult<()> {
    let mut q = insert(["username", "email"]);
    q.into_table("users").values([
        ["alice", "alice@example.com"],
        ["bob", "bob@example.com"],
    ])?;

    let built = q.build_insert()?;
    assert_eq!(q.kind(), StatementKind::Insert);
    assert_eq!(
        built.sql,
        "INSERT INTO users (username, email) VALUES ($1, $2), ($3, $4);"
    );
    assert_eq!(built.params.len(), 4);
    assert_eq!(built.params[2], Value::from("bob"));
    Ok(())
}

#[test]
fn insert_typed_values() -> BuildResult<()> {
    let id = uuid::Uuid::nil();
    let born = chrono::NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
    let meta = serde_json::json!({ "plan": "pro" });

    let row: Vec<ValueArg> = vec![id.into(), born.into(), meta.clone().into(), 3.5f64.into()];
    let mut q = Query::insert_positional();
    q.into_table("accounts").values(row)?;

    assert_eq!(
        q.insert_statement()?,
        "INSERT INTO accounts VALUES ($1, $2, $3, $4);"
    );
    assert_eq!(
        q.bound_values(),
        &[Value::Uuid(id), Value::Date(born), Value::Json(meta), Value::Float(3.5)]
    );
    Ok(())
}

#[test]
fn insert_needs_target_and_values() {
    let mut q = insert(["a"]);
    assert_eq!(q.insert_statement(), Err(BuildError::MissingInsertTarget));
    assert!(q.build_insert().is_err());
}

#[test]
fn replacing_values_rebinds() -> BuildResult<()> {
    let mut q = insert(["a", "b"]);
    q.into_table("t").values([1, 2])?;
    assert_eq!(q.insert_statement()?, "INSERT INTO t (a, b) VALUES ($1, $2);");

    q.values([[3, 4], [5, 6]])?;
    assert_eq!(q.insert_statement()?, "INSERT INTO t (a, b) VALUES ($1, $2), ($3, $4);");
    assert_eq!(
        q.bound_values(),
        &[Value::from(3), Value::from(4), Value::from(5), Value::from(6)]
    );
    Ok(())
}
