mod cli;
mod client;
mod models;
mod render;

use client::HTTPClient;

fn main() {
    let config = cli::parse_config();
    let client = HTTPClient::new(&config.base_url);
    render::banner(&config);
    match client.generate(&config.form) {
        Ok(text) => render::captions(&text),
        Err(err) => {
            render::error(&err);
            std::process::exit(1);
        }
    }
}
