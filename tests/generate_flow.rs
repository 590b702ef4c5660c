//! End-to-end tests for the generation flow, from configuration to sink.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread;

use tempfile::TempDir;
use utm_links::{run_generate_with, Config, ExportFormat, LocalSink, MemorySink};

fn write_candidates(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("candidates.txt");
    let mut file = std::fs::File::create(&path).expect("create candidate file");
    write!(file, "{content}").expect("write candidate file");
    path
}

/// Serves a fixed candidate document to every connection on a local port.
///
/// Minimal HTTP/1.1 responder on a background thread; it runs until the test
/// process exits. Returns the address to fetch.
fn serve_candidates(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind list server");
    let port = listener.local_addr().expect("list server address").port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let _ = answer_list_request(stream, body);
        }
    });
    format!("http://127.0.0.1:{port}/products.txt")
}

fn answer_list_request(mut stream: TcpStream, body: &str) -> std::io::Result<()> {
    let mut request = [0u8; 1024];
    let _ = stream.read(&mut request)?;
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    stream.write_all(response.as_bytes())
}

#[tokio::test]
async fn test_explicit_url_produces_one_link_with_default_params() {
    let config = Config {
        url: Some("https://loja.freecook.com.br/fritadeira-af500".to_string()),
        ..Default::default()
    };
    let sink = MemorySink::new();

    let report = run_generate_with(config, &sink)
        .await
        .expect("run should succeed");

    assert_eq!(report.links.len(), 1);
    assert_eq!(report.candidate_count, 0, "no candidate list should be loaded");
    assert!(report.exported.is_none());
    assert_eq!(
        report.links[0].utm_url,
        "https://loja.freecook.com.br/fritadeira-af500?utm_source=google&utm_medium=cpc&utm_campaign=black_friday_2025&utm_content=banner_promo"
    );
    assert_eq!(sink.copied(), vec![report.links[0].utm_url.clone()]);
}

#[tokio::test]
async fn test_empty_url_argument_still_generates_the_batch() {
    let dir = TempDir::new().expect("temp dir");
    let list = write_candidates(
        &dir,
        "https://loja.freecook.com.br/af500\nhttps://loja.freecook.com.br/lq300\n",
    );

    // An empty positional argument, e.g. from an unset shell variable, must
    // behave exactly like no argument at all
    let config = Config {
        url: Some(String::new()),
        list_file: Some(list),
        ..Default::default()
    };
    let sink = MemorySink::new();

    let report = run_generate_with(config, &sink)
        .await
        .expect("run should succeed");

    assert_eq!(
        report.candidate_count, 2,
        "an empty URL argument must not suppress the candidate list"
    );
    assert_eq!(report.links.len(), 2);
    assert_eq!(
        report.links[0].original_url,
        "https://loja.freecook.com.br/af500"
    );
}

#[tokio::test]
async fn test_candidate_file_drives_the_batch() {
    let dir = TempDir::new().expect("temp dir");
    let list = write_candidates(
        &dir,
        "# produtos freecook\nhttps://loja.freecook.com.br/af500\nhttps://loja.freecook.com.br/lq300\n\nhttps://loja.freecook.com.br/pe200\n",
    );

    let config = Config {
        list_file: Some(list),
        ..Default::default()
    };
    let sink = MemorySink::new();

    let report = run_generate_with(config, &sink)
        .await
        .expect("run should succeed");

    assert_eq!(report.candidate_count, 3);
    assert_eq!(report.links.len(), 3);
    assert_eq!(
        report.links[0].original_url,
        "https://loja.freecook.com.br/af500"
    );
    assert_eq!(
        report.links[2].original_url,
        "https://loja.freecook.com.br/pe200"
    );
    assert_eq!(sink.copied().len(), 3, "every link is handed off");
}

#[tokio::test]
async fn test_parameter_overrides_apply_to_every_link() {
    let dir = TempDir::new().expect("temp dir");
    let list = write_candidates(&dir, "https://loja.freecook.com.br/af500\n");

    let config = Config {
        list_file: Some(list),
        source: Some("tiktok".to_string()),
        medium: Some("video".to_string()),
        ..Default::default()
    };
    let sink = MemorySink::new();

    let report = run_generate_with(config, &sink)
        .await
        .expect("run should succeed");

    let url = &report.links[0].utm_url;
    assert!(url.contains("utm_source=tiktok"));
    assert!(url.contains("utm_medium=video"));
    assert!(
        url.contains("utm_campaign=black_friday_2025"),
        "fields without an override keep the vocabulary default: {}",
        url
    );
}

#[tokio::test]
async fn test_unreachable_list_source_recovers_to_empty_run() {
    // Nothing listens on this port; the fetch fails immediately and the run
    // must continue with an empty candidate list
    let config = Config {
        list_url: Some("http://127.0.0.1:9/products.txt".to_string()),
        timeout_seconds: 2,
        ..Default::default()
    };
    let sink = MemorySink::new();

    let report = run_generate_with(config, &sink)
        .await
        .expect("a dead list endpoint must not fail the run");

    assert_eq!(report.candidate_count, 0);
    assert!(report.links.is_empty());
    assert!(sink.copied().is_empty());
}

#[tokio::test]
async fn test_list_file_outranks_list_url() {
    let dir = TempDir::new().expect("temp dir");
    let list = write_candidates(&dir, "https://loja.freecook.com.br/af500\n");

    // The fetch address points at a dead port; if the file did not win the
    // batch would come back empty
    let config = Config {
        list_file: Some(list),
        list_url: Some("http://127.0.0.1:9/products.txt".to_string()),
        timeout_seconds: 2,
        ..Default::default()
    };
    let sink = MemorySink::new();

    let report = run_generate_with(config, &sink)
        .await
        .expect("run should succeed");

    assert_eq!(
        report.candidate_count, 1,
        "the local file outranks the fetch address"
    );
    assert_eq!(
        report.links[0].original_url,
        "https://loja.freecook.com.br/af500"
    );
}

#[tokio::test]
async fn test_env_var_supplies_the_address_and_list_url_outranks_it() {
    let live = serve_candidates(
        "https://loja.freecook.com.br/af500\nhttps://loja.freecook.com.br/lq300\n",
    );

    // Both phases run inside one test because the variable is process-wide
    std::env::set_var("PRODUCT_LIST_URL", &live);
    let env_sink = MemorySink::new();
    let env_report = run_generate_with(Config::default(), &env_sink).await;

    // Point the variable at a dead port; --list-url must still win over it
    std::env::set_var("PRODUCT_LIST_URL", "http://127.0.0.1:9/products.txt");
    let config = Config {
        list_url: Some(live.clone()),
        ..Default::default()
    };
    let flag_sink = MemorySink::new();
    let flag_report = run_generate_with(config, &flag_sink).await;
    std::env::remove_var("PRODUCT_LIST_URL");

    let env_report = env_report.expect("run should succeed");
    assert_eq!(
        env_report.candidate_count, 2,
        "the environment variable supplies the fetch address"
    );
    assert_eq!(
        env_report.links[1].original_url,
        "https://loja.freecook.com.br/lq300"
    );

    let flag_report = flag_report.expect("run should succeed");
    assert_eq!(
        flag_report.candidate_count, 2,
        "an explicit fetch address outranks the environment variable"
    );
}

#[tokio::test]
async fn test_export_xlsx_writes_a_workbook_file() {
    let dir = TempDir::new().expect("temp dir");
    let target = dir.path().join("campanha.xlsx");

    let config = Config {
        url: Some("https://loja.freecook.com.br/af500".to_string()),
        output: Some(target.clone()),
        ..Default::default()
    };

    let report = run_generate_with(config, &LocalSink)
        .await
        .expect("run should succeed");

    assert_eq!(report.exported, Some(target.clone()));
    let bytes = std::fs::read(&target).expect("workbook file exists");
    assert!(
        bytes.starts_with(b"PK\x03\x04"),
        "XLSX documents are ZIP archives"
    );
}

#[tokio::test]
async fn test_export_uses_default_brand_file_name() {
    let config = Config {
        url: Some("https://loja.freecook.com.br/af500".to_string()),
        export: true,
        format: ExportFormat::Csv,
        ..Default::default()
    };
    let sink = MemorySink::new();

    let report = run_generate_with(config, &sink)
        .await
        .expect("run should succeed");

    assert_eq!(report.exported, Some(PathBuf::from("links_utm_freecook.csv")));
    let documents = sink.documents();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].0, PathBuf::from("links_utm_freecook.csv"));

    let text = String::from_utf8(documents[0].1.clone()).expect("CSV is UTF-8");
    assert!(text.starts_with("Produto (URL original),Link UTM Gerado,"));
    assert!(text.contains("https://loja.freecook.com.br/af500"));
}

#[tokio::test]
async fn test_empty_batch_exports_header_only_document() {
    let dir = TempDir::new().expect("temp dir");
    let list = write_candidates(&dir, "# nothing here\n\n");

    let config = Config {
        list_file: Some(list),
        export: true,
        format: ExportFormat::Csv,
        ..Default::default()
    };
    let sink = MemorySink::new();

    let report = run_generate_with(config, &sink)
        .await
        .expect("run should succeed");

    assert!(report.links.is_empty());
    let documents = sink.documents();
    assert_eq!(documents.len(), 1);
    let text = String::from_utf8(documents[0].1.clone()).expect("CSV is UTF-8");
    assert_eq!(
        text,
        "Produto (URL original),Link UTM Gerado,utm_source,utm_medium,utm_campaign,utm_content\n"
    );
}

#[tokio::test]
async fn test_failed_export_write_surfaces_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let target = dir.path().join("missing").join("campanha.xlsx");

    let config = Config {
        url: Some("https://loja.freecook.com.br/af500".to_string()),
        output: Some(target),
        ..Default::default()
    };

    let result = run_generate_with(config, &LocalSink).await;
    let error = result.expect_err("writing into a missing directory must fail the run");
    assert!(
        format!("{error:#}").contains("campanha.xlsx"),
        "error should name the document: {error:#}"
    );
}
