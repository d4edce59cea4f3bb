mod common;

use axum::http::StatusCode;
use common::setup;

fn totais(resp: &common::TestResponse) -> Vec<f64> {
    resp.context()["relatorio"]["meses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["total"].as_f64().unwrap())
        .collect()
}

#[tokio::test]
async fn empty_report_has_twelve_zero_months() {
    let app = setup();

    let resp = app.get("/relatorio").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.template(), "exibir_relatorio_coleta.html");
    let meses = resp.context()["relatorio"]["meses"].as_array().unwrap();
    assert_eq!(meses.len(), 12);
    assert_eq!(meses[0]["ano"], 2022);
    assert_eq!(meses[0]["mes"], 7);
    assert_eq!(meses[11]["ano"], 2023);
    assert_eq!(meses[11]["mes"], 6);
    assert!(totais(&resp).iter().all(|t| *t == 0.0));
    assert_eq!(resp.context()["criacoes"][0]["id"], "123");
}

#[tokio::test]
async fn current_month_is_summed() {
    let app = setup();
    app.nova_coleta("2023-06-01", "10").await;
    app.nova_coleta("2023-06-02", "5").await;

    let resp = app.get("/relatorio").await;

    let totais = totais(&resp);
    assert_eq!(totais[11], 15.0);
    assert_eq!(totais[..11].iter().sum::<f64>(), 0.0);
    assert_eq!(resp.context()["relatorio"]["total_geral"], 15.0);
}

#[tokio::test]
async fn old_collections_fall_outside_window() {
    let app = setup();
    app.nova_coleta("2022-06-30", "100").await;
    app.nova_coleta("2022-07-01", "3").await;

    let resp = app.get("/relatorio").await;

    let totais = totais(&resp);
    assert_eq!(totais[0], 3.0);
    assert_eq!(totais.iter().sum::<f64>(), 3.0);
}

#[tokio::test]
async fn filter_by_criacao() {
    let app = setup();
    app.post(
        "/criacoes/novo",
        &[("id", "456"), ("raca", "Galinha"), ("data_entrada", "2023-01-01")],
    )
    .await;
    app.nova_coleta("2023-06-01", "10").await;
    app.post(
        "/coletas/novo",
        &[("criacao", "456"), ("data", "2023-06-01"), ("quantidade", "4")],
    )
    .await;

    let todas = app.get("/relatorio").await;
    assert_eq!(totais(&todas)[11], 14.0);

    let filtrado = app.get("/relatorio?criacao=456").await;
    assert_eq!(filtrado.status, StatusCode::OK);
    assert_eq!(totais(&filtrado)[11], 4.0);
    assert_eq!(filtrado.context()["relatorio"]["criacao_id"], "456");
}

#[tokio::test]
async fn blank_filter_means_all() {
    let app = setup();
    app.nova_coleta("2023-06-01", "10").await;

    let resp = app.get("/relatorio?criacao=").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(totais(&resp)[11], 10.0);
}

#[tokio::test]
async fn unknown_criacao_filter_is_not_found() {
    let app = setup();

    let resp = app.get("/relatorio?criacao=999").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
