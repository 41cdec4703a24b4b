//! Client SDK integration tests
//!
//! Start the real HTTP server on an ephemeral port and talk to it with
//! [`ProduceClient`].

#[cfg(test)]
mod tests {
    use crate::common::seeded_state;
    use actix_web::rt;
    use reqwest::StatusCode;
    use serde_json::json;
    use supermarket::core::query::ListProduceParams;
    use supermarket::sdk::{ClientConfig, ProduceClient};
    use supermarket::server::HttpServer;

    async fn start_server() -> (ProduceClient, actix_web::dev::ServerHandle) {
        let (state, _) = seeded_state();
        let server = actix_web::HttpServer::new(move || HttpServer::create_app(state.clone()))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        rt::spawn(server);

        let client =
            ProduceClient::new(ClientConfig::new(format!("http://{}", addr)).with_timeout(5))
                .unwrap();
        (client, handle)
    }

    #[actix_web::test]
    async fn test_client_round_trip_against_live_server() {
        let (client, handle) = start_server().await;

        let params = ListProduceParams {
            sort_by: Some("unitPrice".to_string()),
            order: Some("desc".to_string()),
            limit: Some("1".to_string()),
            ..Default::default()
        };
        let (records, status) = client.list_produce(&params).await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Gala Apple");

        let batch = json!([
            {"name": "Kiwi", "produceCode": "kiwi-0000-1111-2222", "unitPrice": 0.499},
            {"name": "Lettuce", "produceCode": "A12T-4GH7-QPL9-3N4M", "unitPrice": 1.0}
        ]);
        let (body, status) = client.create_produce(&batch.to_string()).await.unwrap();
        assert_eq!(status, StatusCode::MULTI_STATUS);
        assert_eq!(body["created"][0]["produceCode"], "KIWI-0000-1111-2222");
        assert_eq!(body["created"][0]["unitPrice"], 0.5);
        assert_eq!(body["createFailed"][0]["name"], "Lettuce");

        let (body, status) = client.delete_produce("kiwi-0000-1111-2222").await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (records, _) = client
            .list_produce(&ListProduceParams::default())
            .await
            .unwrap();
        assert_eq!(records.len(), 4);

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn test_client_reports_malformed_batch_status() {
        let (client, handle) = start_server().await;

        let (body, status) = client.create_produce(r#"{"name": "x"}"#).await.unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");

        let (body, status) = client.create_produce("[{not json").await.unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");

        handle.stop(true).await;
    }
}
