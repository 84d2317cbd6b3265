//! Runs rendered statements against a live PostgreSQL.
//!
//! Skipped unless `DATABASE_URL` is set (a `.env` file is honoured).

use sqlchain::{Query, Value};

async fn try_connect() -> Option<tokio_postgres::Client> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let (client, connection) = tokio_postgres::connect(&database_url, tokio_postgres::NoTls)
        .await
        .expect("Failed to connect to DATABASE_URL with NoTls");
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("tokio-postgres connection error: {e}");
        }
    });
    Some(client)
}

#[tokio::test]
async fn select_binds_narrowed_integers() {
    let Some(client) = try_connect().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    let mut q = Query::select(["n"]).unwrap();
    q.from([("generate_series(1, 10)", "n")])
        .unwrap()
        .and_where("n", ">", 7)
        .order_by_asc("n");
    let sql = q.select_statement();
    assert_eq!(
        sql,
        "SELECT n FROM generate_series(1, 10) AS n WHERE n>$1 ORDER BY n ASC;"
    );

    let rows = client.query(sql.as_str(), &q.params_ref()).await.unwrap();
    let got: Vec<i32> = rows.iter().map(|row| row.get(0)).collect();
    assert_eq!(got, vec![8, 9, 10]);
}

#[tokio::test]
async fn insert_many_rows_then_count() {
    let Some(client) = try_connect().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    client
        .batch_execute(
            "CREATE TEMP TABLE sqlchain_people (name TEXT NOT NULL, age INT4, nickname TEXT)",
        )
        .await
        .unwrap();

    let mut q = Query::insert(["name", "age", "nickname"]);
    q.into_table("sqlchain_people")
        .values(vec![
            vec![Value::from("alice"), Value::from(30), Value::Null],
            vec![Value::from("bob"), Value::from(41), Value::from("bobby")],
        ])
        .unwrap();
    let built = q.build_insert().unwrap();
    let inserted = client.execute(built.sql.as_str(), &built.params_ref()).await.unwrap();
    assert_eq!(inserted, 2);

    let mut count = Query::select([("COUNT(*)", "total")]).unwrap();
    count
        .from(["sqlchain_people"])
        .unwrap()
        .and_where("age", ">", 35);
    let row = client
        .query_one(count.select_statement().as_str(), &count.params_ref())
        .await
        .unwrap();
    let total: i64 = row.get(0);
    assert_eq!(total, 1);
}
