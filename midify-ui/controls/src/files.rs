use reqwest::{StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

/// Server route returning the JSON file listing.
pub const FILES_ENDPOINT: &str = "/get-files";
const FILE_ROUTE_SEGMENT: &str = "files";

/// Errors emitted while fetching or decoding the file listing.
#[derive(Debug, Error)]
pub enum FilesError {
    #[error("file listing request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("file listing request returned {0}")]
    Status(StatusCode),
    #[error("file listing is not a JSON array of files: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid server url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// One entry of the server file listing. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Decode a `/get-files` response body.
pub fn decode_listing(body: &[u8]) -> Result<Vec<FileDescriptor>, FilesError> {
    Ok(serde_json::from_slice(body)?)
}

/// Rendered file list: one item per descriptor, in server order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileList {
    items: Vec<String>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every current item and render `files` in order.
    pub fn render(&mut self, files: Vec<FileDescriptor>) {
        self.items = files.into_iter().map(|file| file.name).collect();
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// HTTP client for the file listing server.
#[derive(Debug, Clone)]
pub struct FileListClient {
    http: reqwest::Client,
    base: Url,
}

impl FileListClient {
    /// Build a client for the server at `server_url`.
    pub fn new(server_url: &str) -> Result<Self, FilesError> {
        let base = Url::parse(server_url).map_err(|err| {
            FilesError::InvalidUrl {
                url: server_url.to_string(),
                reason: err.to_string(),
            }
        })?;
        if base.cannot_be_a_base() {
            return Err(FilesError::InvalidUrl {
                url: server_url.to_string(),
                reason: String::from("url cannot carry a path"),
            });
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// Address of the listing endpoint.
    pub fn listing_url(&self) -> Result<Url, FilesError> {
        self.base
            .join(FILES_ENDPOINT)
            .map_err(|err| self.invalid_url(err.to_string()))
    }

    /// Address serving the content of the file named `name`.
    pub fn file_url(&self, name: &str) -> Result<Url, FilesError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| self.invalid_url(String::from("url has no path")))?
            .clear()
            .push(FILE_ROUTE_SEGMENT)
            .push(name);
        Ok(url)
    }

    /// Issue one request for the listing. No retries.
    pub async fn fetch(&self) -> Result<Vec<FileDescriptor>, FilesError> {
        let url = self.listing_url()?;
        log::debug!("fetching file listing from {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FilesError::Status(status));
        }

        let body = response.bytes().await?;
        decode_listing(&body)
    }

    fn invalid_url(&self, reason: String) -> FilesError {
        FilesError::InvalidUrl {
            url: self.base.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Answer exactly one HTTP request with `status` and `body`.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let addr = listener.local_addr().expect("listener should have addr");

        tokio::spawn(async move {
            let (mut socket, _) =
                listener.accept().await.expect("client should connect");
            let mut request = [0_u8; 2048];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("response should be written");
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}")
    }

    #[test]
    fn given_listing_with_extra_fields_when_decoded_then_names_are_kept_in_order()
     {
        let body = br#"[{"name":"a.txt","size":3},{"name":"b.txt"}]"#;

        let files = decode_listing(body).expect("listing should decode");

        assert_eq!(
            files,
            vec![FileDescriptor::new("a.txt"), FileDescriptor::new("b.txt")]
        );
    }

    #[test]
    fn given_html_body_when_decoded_then_json_error_is_returned() {
        let result = decode_listing(b"<html>oops</html>");

        assert!(matches!(result, Err(FilesError::Json(_))));
    }

    #[test]
    fn given_object_instead_of_array_when_decoded_then_json_error_is_returned()
    {
        let result = decode_listing(br#"{"name":"a.txt"}"#);

        assert!(matches!(result, Err(FilesError::Json(_))));
    }

    #[test]
    fn given_existing_items_when_rendered_then_previous_items_are_replaced() {
        let mut list = FileList::new();
        list.render(vec![FileDescriptor::new("old.mid")]);

        list.render(vec![
            FileDescriptor::new("a.txt"),
            FileDescriptor::new("b.txt"),
        ]);

        assert_eq!(list.items(), ["a.txt", "b.txt"]);
    }

    #[test]
    fn given_base_with_path_when_building_listing_url_then_route_is_absolute() {
        let client = FileListClient::new("http://localhost:5000/app/")
            .expect("url should parse");

        let url = client.listing_url().expect("listing url should build");

        assert_eq!(url.as_str(), "http://localhost:5000/get-files");
    }

    #[test]
    fn given_name_with_spaces_when_building_file_url_then_segment_is_encoded() {
        let client =
            FileListClient::new("http://localhost:5000").expect("url parses");

        let url = client.file_url("my song.mid").expect("file url builds");

        assert_eq!(url.as_str(), "http://localhost:5000/files/my%20song.mid");
    }

    #[test]
    fn given_garbage_url_when_building_client_then_invalid_url_is_returned() {
        let result = FileListClient::new("not a url");

        assert!(matches!(result, Err(FilesError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn given_server_listing_when_fetched_then_descriptors_are_returned() {
        let base =
            serve_once("200 OK", r#"[{"name":"a.txt"},{"name":"b.txt"}]"#)
                .await;
        let client = FileListClient::new(&base).expect("url should parse");

        let files = client.fetch().await.expect("fetch should succeed");

        assert_eq!(
            files,
            vec![FileDescriptor::new("a.txt"), FileDescriptor::new("b.txt")]
        );
    }

    #[tokio::test]
    async fn given_server_error_status_when_fetched_then_status_error_is_returned()
     {
        let base = serve_once("500 Internal Server Error", "[]").await;
        let client = FileListClient::new(&base).expect("url should parse");

        let result = client.fetch().await;

        assert!(matches!(
            result,
            Err(FilesError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
    }

    #[tokio::test]
    async fn given_unreachable_server_when_fetched_then_http_error_is_returned()
    {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let addr = listener.local_addr().expect("listener should have addr");
        drop(listener);
        let client = FileListClient::new(&format!("http://{addr}"))
            .expect("url should parse");

        let result = client.fetch().await;

        assert!(matches!(result, Err(FilesError::Http(_))));
    }
}
