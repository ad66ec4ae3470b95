use std::time::Duration;

use roster_core::{Employee, EmployeeId};
use roster_storage::{MySqlRepository, ReadRepository, Repository, StorageError};
use roster_test_infra::mysql::{MySqlServer, MysqlConfig};

struct Fixture {
    _mysql: MySqlServer,
    repo: MySqlRepository,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::start(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let repo = connect_with_retry(mysql.database_url()).await;
        repo.init_schema().await.expect("create schema");

        Self {
            _mysql: mysql,
            repo,
        }
    }
}

async fn connect_with_retry(url: &str) -> MySqlRepository {
    let mut last_error = None;

    for _ in 0..20 {
        match MySqlRepository::connect(url).await {
            Ok(repo) => return repo,
            Err(err) => {
                last_error = Some(err);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }
    }

    panic!("failed to connect mysql: {last_error:?}");
}

fn id(value: u64) -> EmployeeId {
    EmployeeId::new(value)
}

#[tokio::test]
async fn save_assigns_id_and_find_returns_record() {
    let fixture = Fixture::start().await;

    let saved = fixture
        .repo
        .save(Employee::new("gokul", "gokul@gmail.com"))
        .await
        .unwrap();
    let saved_id = saved.id.expect("id assigned");

    let got = fixture.repo.find_by_id(saved_id).await.unwrap().unwrap();
    assert_eq!(got, saved);
    assert_eq!(got.name, "gokul");
    assert_eq!(got.email, "gokul@gmail.com");
}

#[tokio::test]
async fn find_returns_none_for_missing_id() {
    let fixture = Fixture::start().await;

    assert!(fixture.repo.find_by_id(id(42)).await.unwrap().is_none());
    assert!(!fixture.repo.exists_by_id(id(42)).await.unwrap());
}

#[tokio::test]
async fn save_with_id_overwrites_existing_row() {
    let fixture = Fixture::start().await;

    let saved = fixture
        .repo
        .save(Employee::new("gokul", "gokul@mail.com"))
        .await
        .unwrap();
    let saved_id = saved.id.unwrap();

    fixture
        .repo
        .save(Employee {
            id: Some(saved_id),
            name: "raj".to_string(),
            email: "raj@mail.com".to_string(),
        })
        .await
        .unwrap();

    let all = fixture.repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, Some(saved_id));
    assert_eq!(all[0].name, "raj");
    assert_eq!(all[0].email, "raj@mail.com");
}

#[tokio::test]
async fn find_all_returns_rows_in_id_order() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .save(Employee::new("gokul", "gokul@mail.com"))
        .await
        .unwrap();
    fixture
        .repo
        .save(Employee::new("raj", "raj@mail.com"))
        .await
        .unwrap();

    let all = fixture.repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "gokul");
    assert_eq!(all[1].email, "raj@mail.com");
}

#[tokio::test]
async fn delete_is_silent_for_missing_rows() {
    let fixture = Fixture::start().await;

    let saved = fixture
        .repo
        .save(Employee::new("gokul", "gokul@mail.com"))
        .await
        .unwrap();
    let saved_id = saved.id.unwrap();

    fixture.repo.delete_by_id(saved_id).await.unwrap();
    fixture.repo.delete_by_id(saved_id).await.unwrap();

    assert!(!fixture.repo.exists_by_id(saved_id).await.unwrap());
}

#[tokio::test]
async fn init_schema_is_repeatable() {
    let fixture = Fixture::start().await;

    fixture.repo.init_schema().await.unwrap();
}

#[tokio::test]
async fn save_rejects_zero_id() {
    let fixture = Fixture::start().await;

    let err = fixture
        .repo
        .save(Employee::with_id(0, "gokul", "gokul@mail.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(_)));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(fixture.repo.pool())
        .await
        .unwrap();
    assert_eq!(rows, 0);
}
