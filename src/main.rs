//! `tokencanvas` - Distorted-token raster renderer for CAPTCHA-style challenges.
//!
//! Copyright (C) 2026 tokencanvas contributors
//! SPDX-License-Identifier: AGPL-3.0-only
//!
//! Initializes logging, loads options from the environment, renders one
//! token image and writes it to disk.

use std::path::PathBuf;

use tokencanvas::{RasterCanvas, TokenGenerator, TokenOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn env_u32_or(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[allow(clippy::expect_used)]
fn main() {
    dotenvy::dotenv().ok();

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stdout());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking);

    if log_format.eq_ignore_ascii_case("json") {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let width = env_u32_or("TOKEN_WIDTH", 300);
    let height = env_u32_or("TOKEN_HEIGHT", 80);
    let output = PathBuf::from(
        std::env::var("TOKEN_OUTPUT").unwrap_or_else(|_| "token.png".to_string()),
    );

    let options = TokenOptions::from_env();
    let canvas = RasterCanvas::new(width, height);
    let mut generator =
        TokenGenerator::new(canvas, &options).expect("Failed to create token generator");

    generator.render().expect("Render pass failed");
    generator
        .surface()
        .save_png(&output)
        .expect("Failed to write token image");

    info!(path = %output.display(), width, height, "token image written");
}
