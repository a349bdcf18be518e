//! Shared helpers for integration tests
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use image::{Rgb, RgbImage};
use qrpages::{PageRenderer, QrEncoder, TextRenderer};
use tiny_http::{Response, Server};

static INIT: Once = Once::new();

pub const SCENARIO: &str =
    r#"{"checkpoints": [{"id": 101, "title": "Lobby"}, {"id": 202, "title": "Lab"}]}"#;

/// Start a fixture server on `port` serving checkpoint documents
pub fn start_test_server(port: u16) -> String {
    INIT.call_once(move || {
        let server = Server::http(("127.0.0.1", port)).unwrap();
        std::thread::spawn(move || {
            for request in server.incoming_requests() {
                let json = |body: &str| {
                    Response::from_string(body).with_header(
                        "Content-Type: application/json"
                            .parse::<tiny_http::Header>()
                            .unwrap(),
                    )
                };
                let response = match request.url() {
                    "/checkpoints.json" => json(SCENARIO),
                    "/empty.json" => json(r#"{"checkpoints": []}"#),
                    "/duplicates.json" => json(
                        r#"{"checkpoints": [{"id": 1, "title": "Same"}, {"id": 2, "title": "Same"}]}"#,
                    ),
                    "/no-checkpoints.json" => json(r#"{"points": [{"id": 1, "title": "A"}]}"#),
                    "/missing-title.json" => json(r#"{"checkpoints": [{"id": 1}]}"#),
                    "/broken-id.json" => json(
                        r#"{"checkpoints": [{"id": 1, "title": "A"}, {"id": null, "title": "B"}, {"id": 3, "title": "C"}]}"#,
                    ),
                    "/nested-title.json" => json(
                        r#"{"checkpoints": [{"id": 1, "title": "A"}, {"id": 2, "title": "sub/B"}, {"id": 3, "title": "C"}]}"#,
                    ),
                    "/malformed.json" => Response::from_string("<html><body>oops</body></html>")
                        .with_header("Content-Type: text/html".parse::<tiny_http::Header>().unwrap()),
                    "/error" => Response::from_string("boom").with_status_code(500),
                    _ => Response::from_string("Not Found").with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });
    });

    format!("http://127.0.0.1:{}", port)
}

/// Draws a solid block of 10px per character, 20px tall
pub struct BlockText;

impl TextRenderer for BlockText {
    fn measure(&self, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * 10, 20)
    }

    fn draw(&self, canvas: &mut RgbImage, text: &str, x: i64, y: i64, color: Rgb<u8>) {
        let (w, h) = self.measure(text);
        let block = RgbImage::from_pixel(w, h, color);
        image::imageops::replace(canvas, &block, x, y);
    }
}

pub fn block_renderer() -> PageRenderer<QrEncoder, BlockText> {
    PageRenderer::new(QrEncoder::default(), BlockText)
}

/// A TrueType font to test real label rendering with, if one is installed.
/// The path is absolute so it survives a change of working directory.
pub fn test_font() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("QRPAGES_TEST_FONT") {
        let path = PathBuf::from(path);
        return Some(path.canonicalize().unwrap_or(path));
    }
    [
        "Roboto-Regular.ttf",
        "/usr/share/fonts/truetype/roboto/unhinted/RobotoTTF/Roboto-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.is_file())
    .map(|p| p.canonicalize().unwrap_or(p))
}
