use axum::Router;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Serve `router` on an ephemeral local port and return the server origin
pub async fn spawn_stub_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Failed to read stub address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub backend stopped");
    });

    format!("http://{}", addr)
}
