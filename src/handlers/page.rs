use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use crate::server::AppState;

/// Root page. Counts the request, rolls the synthetic v3 error, otherwise
/// renders the version-labeled page. The 500 here is simulated application
/// behavior, not a fault.
pub async fn page_handler(State(state): State<Arc<AppState>>) -> Response {
    state.metrics.requests.inc();

    if state.config.roll_synthetic_error(&mut rand::thread_rng()) {
        state.metrics.errors.inc();
        debug!(version = %state.config.version, "injected synthetic error");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Error!").into_response();
    }

    Html(render_page(
        &state.config.version,
        state.config.gradient(),
        state.metrics.requests.get(),
        state.metrics.errors.get(),
    ))
    .into_response()
}

fn render_page(version: &str, gradient: &str, requests: u64, errors: u64) -> String {
    format!(
        r#"<html>
    <head>
        <title>Canary Demo - {version}</title>
        <style>
            body {{
                font-family: Arial, sans-serif;
                display: flex;
                justify-content: center;
                align-items: center;
                height: 100vh;
                margin: 0;
                background: {gradient};
            }}
            .container {{
                text-align: center;
                background: white;
                padding: 50px;
                border-radius: 10px;
                box-shadow: 0 10px 40px rgba(0,0,0,0.3);
            }}
            h1 {{
                color: #333;
                font-size: 3em;
                margin: 0;
            }}
            .version {{
                color: #e74c3c;
                font-size: 2em;
                margin-top: 20px;
                font-weight: bold;
            }}
            .metrics {{
                font-size: 1em;
                color: #7f8c8d;
                margin-top: 15px;
            }}
        </style>
    </head>
    <body>
        <div class="container">
            <h1>🚀 Canary Deployment Demo</h1>
            <p class="version">Version: {version}</p>
            <p class="metrics">Requests: {requests} | Errors: {errors}</p>
        </div>
    </body>
</html>
"#
    )
}
