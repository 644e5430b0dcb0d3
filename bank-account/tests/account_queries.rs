use bank_account::application::{BankAccountFilterCriteria, BankAccountProjection};
use bank_account::domain::{AccountBalance, BankAccount, BankAccountId, Currency, Money};
use bank_account::infrastructure::InMemoryBankAccountQueryRepository;
use seedwork_application::filter::FilterOperator;
use seedwork_application::query_repository::QueryRepository;
use seedwork_domain::persist::{InMemoryRepository, Repository};
use serde_json::json;
use std::sync::Arc;

async fn seeded(balances: &[(&str, i64, Currency)]) -> InMemoryBankAccountQueryRepository {
    let accounts = Arc::new(InMemoryRepository::<BankAccount>::new());
    for (id, amount, currency) in balances {
        let account = BankAccount::create(
            Some(BankAccountId::parse(*id).unwrap()),
            Some(AccountBalance::new(*amount, *currency).unwrap()),
        );
        accounts.save(&account).await.unwrap();
    }
    InMemoryBankAccountQueryRepository::new(accounts)
}

fn ids(projections: &[BankAccountProjection]) -> Vec<&str> {
    projections.iter().map(|p| p.id.as_str()).collect()
}

fn criterion(field: &str, op: FilterOperator, value: serde_json::Value) -> BankAccountFilterCriteria {
    BankAccountFilterCriteria::new(field, op, value).unwrap()
}

#[tokio::test]
async fn filters_by_balance_in_store_order() {
    let repo = seeded(&[
        ("acc-a", 0, Currency::Usd),
        ("acc-b", 100, Currency::Usd),
        ("acc-c", 200, Currency::Usd),
    ])
    .await;
    let gte_100 = [criterion("balanceAmount", FilterOperator::Gte, json!(100))];

    let all = repo.filter(0, 10, &gte_100).await.unwrap();
    assert_eq!(ids(&all), vec!["acc-b", "acc-c"]);

    let page = repo.filter(1, 1, &gte_100).await.unwrap();
    assert_eq!(ids(&page), vec!["acc-c"]);

    let beyond = repo.filter(5, 10, &gte_100).await.unwrap();
    assert!(beyond.is_empty());
}

#[tokio::test]
async fn criteria_are_conjunctive() {
    let repo = seeded(&[
        ("acc-a", 50, Currency::Eur),
        ("acc-b", 150, Currency::Eur),
        ("acc-c", 150, Currency::Usd),
    ])
    .await;

    let found = repo
        .filter(
            0,
            10,
            &[
                criterion("currency", FilterOperator::Eq, json!("EUR")),
                criterion("balance", FilterOperator::Between, json!([100, 200])),
            ],
        )
        .await
        .unwrap();
    assert_eq!(ids(&found), vec!["acc-b"]);

    let none = repo
        .filter(0, 10, &[criterion("id", FilterOperator::In, json!([]))])
        .await
        .unwrap();
    assert!(none.is_empty());

    let like = repo
        .filter(0, 10, &[criterion("id", FilterOperator::Like, json!("ACC-C"))])
        .await
        .unwrap();
    assert_eq!(ids(&like), vec!["acc-c"]);
}

#[tokio::test]
async fn no_criteria_pages_over_everything() {
    let repo = seeded(&[
        ("acc-a", 1, Currency::Usd),
        ("acc-b", 2, Currency::Usd),
        ("acc-c", 3, Currency::Usd),
    ])
    .await;

    let page = repo.filter(1, 2, &[]).await.unwrap();
    assert_eq!(ids(&page), vec!["acc-b", "acc-c"]);
}

#[tokio::test]
async fn get_by_id_projects_balance_and_transactions() {
    let accounts = Arc::new(InMemoryRepository::<BankAccount>::new());
    let account = BankAccount::create(Some(BankAccountId::parse("acc-1").unwrap()), None)
        .deposit(Money::new(25, Currency::Usd).unwrap())
        .unwrap();
    accounts.save(&account).await.unwrap();
    let repo = InMemoryBankAccountQueryRepository::new(accounts);

    let projection = repo.get_by_id("acc-1").await.unwrap().unwrap();
    assert_eq!(projection.balance_amount, 25);
    assert_eq!(projection.currency, "USD");
    assert_eq!(projection.transactions.len(), 1);
    assert_eq!(projection.transactions[0].kind, "deposit");

    assert!(repo.get_by_id("acc-2").await.unwrap().is_none());
    assert!(repo.get_by_id("bogus").await.is_err());
}

#[test]
fn unknown_fields_are_rejected_up_front() {
    let err = BankAccountFilterCriteria::new("owner", FilterOperator::Eq, json!("x")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation: invalid field \"owner\"; allowed: id, balanceAmount, balance, currency"
    );
}
