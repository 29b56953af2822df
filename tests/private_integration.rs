use std::sync::{Arc, Once};

use tracing_subscriber::EnvFilter;
use wiremock::matchers::{any, body_json, body_string, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kuna_api_client::auth::{NonceProvider, StaticCredentials};
use kuna_api_client::rest::{
    ActiveOrdersRequest, CreateKunaCodeRequest, HistoryRequest, KunaCodesRequest, KunaRestClient,
    OrdersHistoryRequest, WithdrawRequest,
};
use kuna_api_client::{KunaClient, KunaError, OrderSide, TradePosition};

const PUBLIC: &str = "pUbLiCkEy0pUbLiCkEy0pUbLiCkEy0pUbLiCkEy0";
const SECRET: &str = "sEcReTkEy0sEcReTkEy0sEcReTkEy0sEcReTkEy0";
const NONCE: u64 = 1616492376594;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_log::LogTracer::init();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

struct FixedNonce(u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

fn build_client(server: &MockServer) -> KunaRestClient {
    init_tracing();
    KunaRestClient::builder()
        .base_url(server.uri())
        .payment_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(PUBLIC, SECRET)))
        .nonce_provider(Arc::new(FixedNonce(NONCE)))
        .build()
}

fn cancelled_order(id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "side": "sell",
        "type": "limit",
        "price": "1500000",
        "avg_execution_price": "0",
        "state": "canceled",
        "symbol": "btcuah",
        "timestamp": 1616593422,
        "original_amount": "0.1",
        "remaining_amount": "0.1",
        "executed_amount": "0",
        "is_live": true
    })
}

#[tokio::test]
async fn test_get_wallets_signed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/r/wallets"))
        .and(header("accept", "application/json"))
        .and(header("kun-nonce", "1616492376594"))
        .and(header("kun-apikey", PUBLIC))
        .and(header(
            "kun-signature",
            "f9e863db2212b8c63a5c8f65f0eca52dc56438ecd11fc9394e6d7e921b132b9fe4352a1164e2da74f0fdce78c499aa3c",
        ))
        .and(body_string("{}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            [0, "BTC", 1.5, 0, 1.2],
            ["exchange", "UAH", "2500", null, "2000.5"]
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let wallets = client.get_wallets().await.unwrap();

    assert_eq!(wallets.len(), 2);
    assert_eq!(wallets[0].currency, "BTC");
    assert_eq!(wallets[0].total, 1.5);
    assert_eq!(wallets[0].available, 1.2);
    assert_eq!(wallets[1].available, 2000.5);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_cancel_order_signs_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/order/cancel"))
        .and(header("content-type", "application/json"))
        .and(header(
            "kun-signature",
            "ed51dac4ef970dd5239ba209d7adab1bee6842cbea01d5ac417cc35963857cfc0d49bce96676fc29dfc8cca6a9b04291",
        ))
        .and(body_string(r#"{"order_id":100109}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(cancelled_order(100109)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client.cancel_order(100109).await.unwrap();

    assert_eq!(order.id, 100109);
    assert_eq!(order.side, OrderSide::Sell);
    assert_eq!(order.price, 1500000.0);
    assert_eq!(order.is_live, None);
}

#[tokio::test]
async fn test_cancel_orders() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/order/cancel/multi"))
        .and(body_json(serde_json::json!({"order_ids": [1, 2]})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([cancelled_order(1), cancelled_order(2)])),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client.cancel_orders(&[1, 2]).await.unwrap();
    let ids: Vec<u64> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_get_active_orders_for_market() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/r/orders/btcuah"))
        .and(body_json(serde_json::json!({"ids": [100109]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([[
            100109, null, null, "btcuah", 1616593422000_i64, 1616593422000_i64,
            "-0.5", "-1", "LIMIT", null, null, null, null, "ACTIVE",
            null, null, "1500000", null
        ]])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client
        .get_active_orders(Some("btcuah"), &ActiveOrdersRequest::ids([100109]))
        .await
        .unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].side, OrderSide::Sell);
    assert_eq!(orders[0].initial_volume, 1.0);
    assert_eq!(orders[0].price, Some(1500000.0));
}

#[tokio::test]
async fn test_get_orders_history_without_market() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/r/orders/hist"))
        .and(body_json(serde_json::json!({"limit": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client
        .get_orders_history(None, &OrdersHistoryRequest::default().limit(10))
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_get_order_trades() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/r/order/btcuah:100109/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            [3001, "btcuah", 1616593422000_i64, 100109, "0.5", "1500000", "LIMIT", "1500000", -1, "0.001", "btc"]
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trades = client.get_order_trades("btcuah", 100109).await.unwrap();
    assert_eq!(trades[0].position, TradePosition::Taker);
    assert_eq!(trades[0].order_id, 100109);
}

#[tokio::test]
async fn test_account_info() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "email": "trader@example.com",
            "kunaid": "kunaid-abc",
            "two_factor": true,
            "withdraw_confirmation": false,
            "public_keys": {
                "deposit_sdk_uah_public_key": "pk_uah"
            },
            "announcements": false
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_account_info().await.unwrap();
    assert_eq!(info.email, "trader@example.com");
    assert!(info.two_factor);
    assert_eq!(info.public_keys.deposit_sdk_uah_public_key.as_deref(), Some("pk_uah"));
}

#[tokio::test]
async fn test_payment_endpoints_use_payment_host() {
    let trading = MockServer::start().await;
    let payment = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&trading)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/withdraw"))
        .and(header_exists("kun-signature"))
        .and(body_json(serde_json::json!({
            "withdraw_type": "btc",
            "amount": 0.01,
            "address": "bc1qexample"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"withdrawal_id": 5521})),
        )
        .expect(1)
        .mount(&payment)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/history/deposits"))
        .and(body_json(serde_json::json!({"currency": "uah"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 77,
            "amount": "1000",
            "currency": "uah",
            "status": "done",
            "created_at": "2021-03-24T13:43:42Z"
        }])))
        .expect(1)
        .mount(&payment)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/withdraw/details"))
        .and(body_json(serde_json::json!({"id": "5521"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "5521",
            "amount": 0.01,
            "fee": "0.0005",
            "currency": "btc",
            "status": "processing",
            "txid": null,
            "created_at": 1616593422000_i64
        })))
        .expect(1)
        .mount(&payment)
        .await;

    let client = KunaRestClient::builder()
        .base_url(trading.uri())
        .payment_url(payment.uri())
        .credentials(Arc::new(StaticCredentials::new(PUBLIC, SECRET)))
        .build();

    let created = client
        .create_withdraw(&WithdrawRequest::new("btc", 0.01, "bc1qexample"))
        .await
        .unwrap();
    assert_eq!(created.withdrawal_id, "5521");

    let deposits = client
        .get_deposit_history(&HistoryRequest::currency("uah"))
        .await
        .unwrap();
    assert_eq!(deposits[0].id, "77");
    assert_eq!(deposits[0].amount, 1000.0);

    let withdraw = client.get_withdraw_details("5521").await.unwrap();
    assert_eq!(withdraw.fee, Some(0.0005));
    assert_eq!(withdraw.txid, None);
}

#[tokio::test]
async fn test_kuna_codes() {
    let server = MockServer::start().await;
    let code = serde_json::json!({
        "id": 12,
        "sn": "9bWsM",
        "code": "1-UAH-KCode",
        "amount": "100",
        "currency": "uah",
        "status": "created",
        "comment": "gift"
    });

    Mock::given(method("POST"))
        .and(path("/v3/auth/kuna_codes"))
        .and(body_json(serde_json::json!({"amount": 100.0, "currency": "uah", "comment": "gift"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(code.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/kuna_codes/issued-by-me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([code.clone()])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/kuna_codes/redeemed-by-me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v3/auth/kuna_codes/redeem"))
        .and(body_json(serde_json::json!({"code": "1-UAH-KCode"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(code))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);

    let created = client
        .create_kuna_code(&CreateKunaCodeRequest::new(100.0, "uah").comment("gift"))
        .await
        .unwrap();
    assert_eq!(created.id, Some(12));

    let issued = client
        .get_issued_kuna_codes(&KunaCodesRequest::default())
        .await
        .unwrap();
    assert_eq!(issued.len(), 1);

    let redeemed = client
        .get_redeemed_kuna_codes(&KunaCodesRequest::default())
        .await
        .unwrap();
    assert!(redeemed.is_empty());

    let code = client.redeem_kuna_code("1-UAH-KCode").await.unwrap();
    assert_eq!(code.sn, "9bWsM");
}

#[tokio::test]
async fn test_invalid_credentials_send_nothing() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let short = KunaRestClient::builder()
        .base_url(server.uri())
        .payment_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new("short", SECRET)))
        .build();
    let missing = KunaRestClient::builder()
        .base_url(server.uri())
        .payment_url(server.uri())
        .build();

    for client in [&short, &missing] {
        let results = [
            client.get_account_info().await.map(|_| ()),
            client.get_wallets().await.map(|_| ()),
            client
                .get_active_orders(None, &ActiveOrdersRequest::default())
                .await
                .map(|_| ()),
            client
                .get_orders_history(None, &OrdersHistoryRequest::default())
                .await
                .map(|_| ()),
            client.get_order_trades("btcuah", 1).await.map(|_| ()),
            client.cancel_order(1).await.map(|_| ()),
            client.cancel_orders(&[1]).await.map(|_| ()),
            client.get_deposit_details("1").await.map(|_| ()),
            client
                .get_deposit_history(&HistoryRequest::default())
                .await
                .map(|_| ()),
            client
                .create_withdraw(&WithdrawRequest::new("btc", 1.0, "addr"))
                .await
                .map(|_| ()),
            client.get_withdraw_details("1").await.map(|_| ()),
            client
                .get_withdraw_history(&HistoryRequest::default())
                .await
                .map(|_| ()),
            client
                .create_kuna_code(&CreateKunaCodeRequest::new(1.0, "uah"))
                .await
                .map(|_| ()),
            client
                .get_issued_kuna_codes(&KunaCodesRequest::default())
                .await
                .map(|_| ()),
            client
                .get_redeemed_kuna_codes(&KunaCodesRequest::default())
                .await
                .map(|_| ()),
            client.redeem_kuna_code("1-UAH-KCode").await.map(|_| ()),
        ];
        for result in results {
            assert!(matches!(result, Err(KunaError::InvalidCredential(_))));
        }
    }
}

#[tokio::test]
async fn test_private_placeholders_send_nothing() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(client.create_order().await.operation, "create_order");
    assert_eq!(client.get_saved_cards().await.operation, "get_saved_cards");
    assert_eq!(
        KunaClient::delete_saved_card(&client).await.operation,
        "delete_saved_card"
    );
}

#[tokio::test]
async fn test_exchange_rejects_signature() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/auth/me"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(serde_json::json!({"messages": ["signature_is_incorrect"]})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    match client.get_account_info().await.unwrap_err() {
        KunaError::Api(api) => {
            assert_eq!(api.status, 403);
            assert!(api.is_invalid_signature());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_redeem_rejects_bad_checksum_offline() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    for code in ["2-UAH-KCode", "22222-UAH-KCode", "0-UAH-KCode", "KCode"] {
        let err = client.redeem_kuna_code(code).await.unwrap_err();
        assert!(matches!(err, KunaError::InvalidChecksum(_)), "{code}: {err:?}");
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}
