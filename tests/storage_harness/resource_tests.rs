//! Macro-generated test suite for the REST resource contract.
//!
//! `resource_api_tests!($factory)` builds a test server on top of the store
//! produced by `$factory` and checks every resource under `/api`:
//!
//! - create rejects a body that already carries an id
//! - create assigns an id and answers 201 with `Location` and alert headers
//! - update replaces the row and keeps the row count
//! - update rejects a body without an id
//! - delete answers 204 and removes the row
//! - get of an unknown id answers 404
//!
//! followed by the relation filters, eager loading, health endpoints and
//! body decoding edge cases.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use saha::storage::InMemoryEntityStore;
//!
//! resource_api_tests!(InMemoryEntityStore::new());
//! ```

/// Contract checks for one resource
///
/// `$server` names an async fn returning a fresh `TestServer`. `$sample` and
/// `$updated` are JSON objects without an id, used as create and update bodies.
#[macro_export]
macro_rules! resource_contract {
    ($server:ident, $name:ident, $path:literal, $entity:literal, $sample:tt, $updated:tt) => {
        mod $name {
            use super::*;

            fn sample() -> Value {
                json!($sample)
            }

            fn updated(id: i64) -> Value {
                let mut body = json!($updated);
                body["id"] = json!(id);
                body
            }

            fn url(id: i64) -> String {
                format!("/api/{}/{}", $path, id)
            }

            #[tokio::test]
            async fn test_create_with_existing_id() {
                let server = $server().await;
                let before = count(&server, $path).await;

                let mut body = sample();
                body["id"] = json!(1);
                let response = server.post(concat!("/api/", $path)).json(&body).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(header(&response, ERROR_HEADER).as_deref(), Some("error.idexists"));
                assert_eq!(header(&response, PARAMS_HEADER).as_deref(), Some($entity));
                assert_eq!(count(&server, $path).await, before);
            }

            #[tokio::test]
            async fn test_create() {
                let server = $server().await;
                let before = count(&server, $path).await;

                let response = server.post(concat!("/api/", $path)).json(&sample()).await;

                response.assert_status(StatusCode::CREATED);
                let body = response.json::<Value>();
                let id = body["id"].as_i64().expect("created body should carry an id");
                assert_fields(&body, &sample());

                assert_eq!(header(&response, "location"), Some(url(id)));
                assert_eq!(
                    header(&response, ALERT_HEADER),
                    Some(format!("{}.{}.created", APP, $entity))
                );
                assert_eq!(header(&response, PARAMS_HEADER), Some(id.to_string()));
                assert_eq!(count(&server, $path).await, before + 1);

                let fetched = server.get(&url(id)).await;
                fetched.assert_status(StatusCode::OK);
                let fetched = fetched.json::<Value>();
                assert_eq!(fetched["id"], id);
                assert_fields(&fetched, &sample());
            }

            #[tokio::test]
            async fn test_update() {
                let server = $server().await;
                let id = create(&server, $path, sample()).await;
                let before = count(&server, $path).await;

                let response = server.put(concat!("/api/", $path)).json(&updated(id)).await;

                response.assert_status(StatusCode::OK);
                assert_fields(&response.json::<Value>(), &updated(id));
                assert_eq!(
                    header(&response, ALERT_HEADER),
                    Some(format!("{}.{}.updated", APP, $entity))
                );
                assert_eq!(header(&response, PARAMS_HEADER), Some(id.to_string()));

                let fetched = server.get(&url(id)).await.json::<Value>();
                assert_fields(&fetched, &updated(id));
                assert_eq!(count(&server, $path).await, before);
            }

            #[tokio::test]
            async fn test_update_without_id() {
                let server = $server().await;
                let before = count(&server, $path).await;

                let response = server.put(concat!("/api/", $path)).json(&sample()).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(header(&response, ERROR_HEADER).as_deref(), Some("error.idnull"));
                assert_eq!(count(&server, $path).await, before);
            }

            #[tokio::test]
            async fn test_delete() {
                let server = $server().await;
                let id = create(&server, $path, sample()).await;
                let before = count(&server, $path).await;

                let response = server.delete(&url(id)).await;

                response.assert_status(StatusCode::NO_CONTENT);
                assert_eq!(
                    header(&response, ALERT_HEADER),
                    Some(format!("{}.{}.deleted", APP, $entity))
                );
                assert_eq!(header(&response, PARAMS_HEADER), Some(id.to_string()));
                assert_eq!(count(&server, $path).await, before - 1);
                server.get(&url(id)).await.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let server = $server().await;
                server
                    .get(&url(MISSING_ID))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_list_contains_created() {
                let server = $server().await;
                let id = create(&server, $path, sample()).await;

                let response = server.get(concat!("/api/", $path)).await;
                response.assert_status(StatusCode::OK);
                assert!(ids(&response.json::<Value>()).contains(&id));
            }
        }
    };
}

/// Generate the full REST contract suite on top of the store built by `$factory`
#[macro_export]
macro_rules! resource_api_tests {
    ($factory:expr) => {
        mod resource_api_contract_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};

            /// No resource ever hands out this id
            const MISSING_ID: i64 = 9_999_999_999;

            /// A 400 problem body for an undecodable request, without alert headers
            fn assert_malformed(response: &axum_test::TestResponse) {
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(
                    header(response, "content-type").as_deref(),
                    Some("application/problem+json")
                );
                assert!(header(response, ERROR_HEADER).is_none());

                let body = response.json::<Value>();
                assert_eq!(body["status"], 400);
                assert_eq!(body["message"], "error.http.400");
                assert!(body["detail"].is_string());
            }

            async fn make_server() -> TestServer {
                test_server($factory)
            }

            // ==================================================================
            // Per-resource contract
            // ==================================================================

            resource_contract!(make_server, karbar, "karbars", "karbar",
                {
                    "name": "AAAAAAAAAA",
                    "shoghlSazmani": "AAAAAAAAAA",
                    "shoghlAmali": "AAAAAAAAAA",
                    "codePerseneli": "AAAAAAAAAA",
                    "bezaneshate": false,
                    "sazmani": false,
                    "tarikhBazneshastegi": "1970-01-01T00:00:00Z",
                    "tarikhEstekhdam": "1970-01-01T00:00:00Z",
                    "yegan": {"id": 1}
                },
                {
                    "name": "BBBBBBBBBB",
                    "shoghlSazmani": "BBBBBBBBBB",
                    "shoghlAmali": "BBBBBBBBBB",
                    "codePerseneli": "BBBBBBBBBB",
                    "bezaneshate": true,
                    "sazmani": true,
                    "tarikhBazneshastegi": "2020-01-02T03:04:05Z",
                    "tarikhEstekhdam": "2020-01-02T03:04:05Z",
                    "yegan": {"id": 2}
                });

            resource_contract!(make_server, daraje, "darajes", "daraje",
                {"name": "AAAAAAAAAA", "description": "AAAAAAAAAA"},
                {"name": "BBBBBBBBBB", "description": "BBBBBBBBBB"});

            resource_contract!(make_server, semat, "semats", "semat",
                {"onvanShoghli": "AAAAAAAAAA"},
                {"onvanShoghli": "BBBBBBBBBB"});

            resource_contract!(make_server, dore, "dores", "dore",
                {"begin": "1970-01-01T00:00:00Z", "end": "1970-01-01T00:00:00Z"},
                {"begin": "2020-01-02T03:04:05Z", "end": "2020-02-02T03:04:05Z"});

            resource_contract!(make_server, payam, "payams", "payam",
                {"onvan": "AAAAAAAAAA", "matn": "AAAAAAAAAA", "karbar": {"id": 1}},
                {"onvan": "BBBBBBBBBB", "matn": "BBBBBBBBBB"});

            resource_contract!(make_server, yegan, "yegans", "yegan",
                {"name": "AAAAAAAAAA", "code": "AAAAAAAAAA", "yeganType": {"id": 1}},
                {"name": "BBBBBBBBBB", "code": "BBBBBBBBBB", "shahr": {"id": 2}});

            resource_contract!(make_server, yegan_code, "yegan-codes", "yeganCode",
                {"name": "AAAAAAAAAA", "code": "AAAAAAAAAA"},
                {"name": "BBBBBBBBBB", "code": "BBBBBBBBBB", "yegan": {"id": 3}});

            resource_contract!(make_server, yegan_type, "yegan-types", "yeganType",
                {"name": "AAAAAAAAAA"},
                {"name": "BBBBBBBBBB"});

            resource_contract!(make_server, niroo_code, "niroo-codes", "nirooCode",
                {"name": "AAAAAAAAAA", "code": "AAAAAAAAAA"},
                {"name": "BBBBBBBBBB", "code": "BBBBBBBBBB"});

            resource_contract!(make_server, ostan, "ostans", "ostan",
                {"name": "AAAAAAAAAA", "mantaghe": {"id": 1}},
                {"name": "BBBBBBBBBB", "mantaghe": {"id": 2}});

            resource_contract!(make_server, shahr, "shahrs", "shahr",
                {"name": "AAAAAAAAAA", "zaribAboHava": 1, "zaribTashilat": 1, "masafatTaMarkaz": 1},
                {"name": "BBBBBBBBBB", "zaribAboHava": 2, "zaribTashilat": 2, "masafatTaMarkaz": 2});

            resource_contract!(make_server, mantaghe, "mantaghes", "mantaghe",
                {"name": "AAAAAAAAAA"},
                {"name": "BBBBBBBBBB"});

            resource_contract!(make_server, hesab_resi, "hesab-resis", "hesabResi",
                {"sal": 1, "vaziateHesabResi": "SODOOR_BARGE_MAMOORIAT"},
                {"sal": 2, "vaziateHesabResi": "DAR_SHOROF_MAMOORIAT", "gozaresh": {"id": 4}});

            resource_contract!(make_server, barname_hesab_resi, "barname-hesab-resis", "barnameHesabResi",
                {"noeBarnameHesabResi": "HESABRESI_BARNAMEE"},
                {"noeBarnameHesabResi": "HESABRESI_PEYGIRI"});

            resource_contract!(make_server, gozaresh, "gozareshes", "gozaresh",
                {"vaziat": "AVALIE"},
                {"vaziat": "MODIR"});

            resource_contract!(make_server, barge_mamooriat, "barge-mamooriats", "bargeMamooriat",
                {
                    "vaziat": "SARPARAST_TIME_HESABRESI",
                    "saleMamooriat": 1,
                    "shorooMamooriat": "1970-01-01T00:00:00Z",
                    "payanMamooriat": "1970-01-01T00:00:00Z"
                },
                {
                    "vaziat": "DAR_ENTEZAR_TAEED_MODIR_HESABRESI",
                    "saleMamooriat": 2,
                    "shorooMamooriat": "2020-01-02T03:04:05Z",
                    "payanMamooriat": "2020-01-02T03:04:05Z",
                    "karbar": {"id": 1}
                });

            resource_contract!(make_server, morkhasi, "morkhasis", "morkhasi",
                {"begin": "1970-01-01T00:00:00Z", "end": "1970-01-01T00:00:00Z"},
                {"begin": "2020-01-02T03:04:05Z", "end": "2020-01-03T03:04:05Z", "karbar": {"id": 1}});

            resource_contract!(make_server, negahbani, "negahbanis", "negahbani",
                {"begin": "1970-01-01T00:00:00Z", "end": "1970-01-01T00:00:00Z", "yegan": {"id": 1}},
                {"begin": "2020-01-02T03:04:05Z", "end": "2020-01-03T03:04:05Z", "karbar": {"id": 2}});

            resource_contract!(make_server, file_name, "file-names", "fileName",
                {"madrak": "AQ==", "madrakContentType": "image/jpg"},
                {"madrak": "Ag==", "madrakContentType": "image/png"});

            resource_contract!(make_server, file_hesab_resi, "file-hesab-resis", "fileHesabResi",
                {
                    "file": "AQ==",
                    "fileContentType": "image/jpg",
                    "shomare": 1,
                    "tarikhName": "1970-01-01T00:00:00Z",
                    "mozoo": "AAAAAAAAAA",
                    "fileType": "MadarekBarnameHesabResi"
                },
                {
                    "file": "Ag==",
                    "fileContentType": "image/png",
                    "shomare": 2,
                    "tarikhName": "2020-01-02T03:04:05Z",
                    "mozoo": "BBBBBBBBBB",
                    "fileType": "MohasebeHazineMamooriat"
                });

            resource_contract!(make_server, file_gozaresh, "file-gozareshes", "fileGozaresh",
                {"file": "AQ==", "fileContentType": "image/jpg"},
                {"file": "Ag==", "fileContentType": "image/png", "gozaresh": {"id": 1}});

            resource_contract!(make_server, file_barge_mamooriat, "file-barge-mamooriats", "fileBargeMamooriat",
                {"madarek": "AQ==", "madarekContentType": "image/jpg"},
                {"madarek": "Ag==", "madarekContentType": "image/png"});

            // ==================================================================
            // Reverse one-to-one filters
            // ==================================================================

            #[tokio::test]
            async fn test_gozaresh_hesabresi_is_null_filter() {
                let server = make_server().await;

                let linked = create(&server, "gozareshes", json!({"vaziat": "AVALIE"})).await;
                let free = create(&server, "gozareshes", json!({"vaziat": "MODIR"})).await;
                create(&server, "hesab-resis", json!({"sal": 1, "gozaresh": {"id": linked}})).await;

                let response = server
                    .get("/api/gozareshes")
                    .add_query_param("filter", "hesabresi-is-null")
                    .await;
                response.assert_status(StatusCode::OK);

                let found = ids(&response.json::<Value>());
                assert!(found.contains(&free));
                assert!(!found.contains(&linked));
            }

            #[tokio::test]
            async fn test_barname_hesab_resi_hesabresi_is_null_filter() {
                let server = make_server().await;

                let linked = create(&server, "barname-hesab-resis", json!({})).await;
                let free = create(&server, "barname-hesab-resis", json!({})).await;
                create(
                    &server,
                    "hesab-resis",
                    json!({"sal": 1, "barnameHesabResi": {"id": linked}}),
                )
                .await;

                let response = server
                    .get("/api/barname-hesab-resis")
                    .add_query_param("filter", "hesabresi-is-null")
                    .await;

                let found = ids(&response.json::<Value>());
                assert_eq!(found, vec![free]);
            }

            #[tokio::test]
            async fn test_yegan_yegancode_is_null_filter() {
                let server = make_server().await;

                let linked = create(&server, "yegans", json!({"name": "a"})).await;
                let free = create(&server, "yegans", json!({"name": "b"})).await;
                create(&server, "yegan-codes", json!({"code": "1", "yegan": {"id": linked}})).await;

                let response = server
                    .get("/api/yegans")
                    .add_query_param("filter", "yegancode-is-null")
                    .await;

                let found = ids(&response.json::<Value>());
                assert_eq!(found, vec![free]);
            }

            #[tokio::test]
            async fn test_unknown_filter_lists_everything() {
                let server = make_server().await;

                let linked = create(&server, "gozareshes", json!({})).await;
                create(&server, "hesab-resis", json!({"gozaresh": {"id": linked}})).await;

                let response = server
                    .get("/api/gozareshes")
                    .add_query_param("filter", "karbar-is-null")
                    .await;
                response.assert_status(StatusCode::OK);
                assert!(ids(&response.json::<Value>()).contains(&linked));
            }

            // ==================================================================
            // Eager loading
            // ==================================================================

            #[tokio::test]
            async fn test_karbar_eager_loads_dores() {
                let server = make_server().await;

                let dore = create(
                    &server,
                    "dores",
                    json!({"begin": "2020-01-02T03:04:05Z"}),
                )
                .await;
                let karbar = create(
                    &server,
                    "karbars",
                    json!({"name": "a", "dores": [{"id": dore}, {"id": MISSING_ID}]}),
                )
                .await;

                let fetched = server.get(&format!("/api/karbars/{}", karbar)).await;
                fetched.assert_status(StatusCode::OK);
                let dores = fetched.json::<Value>()["dores"].clone();
                assert_eq!(ids(&dores), vec![dore]);
                assert_eq!(dores[0]["begin"], "2020-01-02T03:04:05Z");

                let listed = server.get("/api/karbars").await.json::<Value>();
                let row = listed
                    .as_array()
                    .unwrap()
                    .iter()
                    .find(|row| row["id"] == karbar)
                    .cloned()
                    .unwrap();
                assert_eq!(row["dores"][0]["begin"], "2020-01-02T03:04:05Z");
            }

            #[tokio::test]
            async fn test_karbar_list_without_eagerload() {
                let server = make_server().await;

                let dore = create(&server, "dores", json!({"begin": "2020-01-02T03:04:05Z"})).await;
                let karbar = create(&server, "karbars", json!({"dores": [{"id": dore}]})).await;

                let listed = server
                    .get("/api/karbars")
                    .add_query_param("eagerload", "false")
                    .await
                    .json::<Value>();
                let row = listed
                    .as_array()
                    .unwrap()
                    .iter()
                    .find(|row| row["id"] == karbar)
                    .cloned()
                    .unwrap();
                assert_eq!(row["dores"], json!([{"id": dore}]));
            }

            #[tokio::test]
            async fn test_yegan_eager_loads_niroo_codes() {
                let server = make_server().await;

                let niroo = create(&server, "niroo-codes", json!({"name": "zamini", "code": "1"})).await;
                let yegan = create(&server, "yegans", json!({"nirooCodes": [{"id": niroo}]})).await;

                let fetched = server
                    .get(&format!("/api/yegans/{}", yegan))
                    .await
                    .json::<Value>();
                assert_eq!(fetched["nirooCodes"][0]["id"], niroo);
                assert_eq!(fetched["nirooCodes"][0]["name"], "zamini");
            }

            #[tokio::test]
            async fn test_eagerload_ignored_without_join_tables() {
                let server = make_server().await;

                let id = create(&server, "payams", json!({"onvan": "a", "karbar": {"id": 4}})).await;

                let plain = server.get("/api/payams").await.json::<Value>();
                let response = server
                    .get("/api/payams")
                    .add_query_param("eagerload", "false")
                    .await;
                response.assert_status(StatusCode::OK);

                let listed = response.json::<Value>();
                assert_eq!(listed, plain);
                assert_eq!(ids(&listed), vec![id]);
                assert_eq!(listed[0]["karbar"], json!({"id": 4}));
            }

            #[tokio::test]
            async fn test_malformed_eagerload() {
                let server = make_server().await;

                for path in ["/api/karbars", "/api/semats"] {
                    let response = server
                        .get(path)
                        .add_query_param("eagerload", "maybe")
                        .await;
                    assert_malformed(&response);
                }
            }

            // ==================================================================
            // Ids, upsert and body decoding
            // ==================================================================

            #[tokio::test]
            async fn test_non_numeric_id() {
                let server = make_server().await;

                let response = server.get("/api/karbars/abc").await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["message"], "error.http.400");

                server
                    .delete("/api/karbars/abc")
                    .await
                    .assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let server = make_server().await;
                server
                    .delete(&format!("/api/semats/{}", MISSING_ID))
                    .await
                    .assert_status(StatusCode::NO_CONTENT);
            }

            #[tokio::test]
            async fn test_update_unknown_id_inserts() {
                let server = make_server().await;

                let response = server
                    .put("/api/mantaghes")
                    .json(&json!({"id": 970_000, "name": "shomal"}))
                    .await;
                response.assert_status(StatusCode::OK);

                let fetched = server.get("/api/mantaghes/970000").await;
                fetched.assert_status(StatusCode::OK);
                assert_eq!(fetched.json::<Value>()["name"], "shomal");

                let next = create(&server, "mantaghes", json!({"name": "jonoob"})).await;
                assert!(next > 970_000);
            }

            #[tokio::test]
            async fn test_invalid_enum_value() {
                let server = make_server().await;

                let response = server
                    .post("/api/gozareshes")
                    .json(&json!({"vaziat": "NAHAEI"}))
                    .await;

                assert_malformed(&response);
                assert_eq!(count(&server, "gozareshes").await, 0);
            }

            #[tokio::test]
            async fn test_invalid_base64() {
                let server = make_server().await;

                let response = server
                    .post("/api/file-names")
                    .json(&json!({"madrak": "not base64!"}))
                    .await;

                assert_malformed(&response);
            }

            #[tokio::test]
            async fn test_malformed_json_body() {
                let server = make_server().await;

                let response = server
                    .put("/api/ostans")
                    .text(r#"{"id": 1, "name": "#)
                    .content_type("application/json")
                    .await;

                assert_malformed(&response);
            }

            #[tokio::test]
            async fn test_update_with_non_positive_id() {
                let server = make_server().await;

                for id in [0, -5] {
                    let response = server
                        .put("/api/mantaghes")
                        .json(&json!({"id": id, "name": "x"}))
                        .await;

                    response.assert_status(StatusCode::BAD_REQUEST);
                    assert_eq!(
                        header(&response, ERROR_HEADER).as_deref(),
                        Some("error.idinvalid")
                    );
                }
                assert_eq!(count(&server, "mantaghes").await, 0);
            }

            #[tokio::test]
            async fn test_exhausted_sequence_is_server_error() {
                let server = make_server().await;

                server
                    .put("/api/mantaghes")
                    .json(&json!({"id": i64::MAX, "name": "x"}))
                    .await
                    .assert_status(StatusCode::OK);

                let response = server
                    .post("/api/mantaghes")
                    .json(&json!({"name": "y"}))
                    .await;
                response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(response.json::<Value>()["message"], "error.storage");

                server.get("/health").await.assert_status(StatusCode::OK);
            }

            #[tokio::test]
            async fn test_null_fields_accepted() {
                let server = make_server().await;

                let id = create(
                    &server,
                    "shahrs",
                    json!({"name": null, "zaribAboHava": null, "ostan": null}),
                )
                .await;
                let fetched = server.get(&format!("/api/shahrs/{}", id)).await;
                fetched.assert_status(StatusCode::OK);
                assert!(fetched.json::<Value>()["name"].is_null());
            }

            // ==================================================================
            // Health
            // ==================================================================

            #[tokio::test]
            async fn test_health_endpoints() {
                let server = make_server().await;

                for path in ["/health", "/healthz", "/management/health"] {
                    let response = server.get(path).await;
                    response.assert_status(StatusCode::OK);
                    assert_eq!(
                        response.json::<Value>(),
                        json!({"status": "UP", "service": APP})
                    );
                }
            }

            #[tokio::test]
            async fn test_unknown_resource() {
                let server = make_server().await;
                server
                    .get("/api/unknowns")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }
        }
    };
}
