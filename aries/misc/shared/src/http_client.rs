use std::time::Duration;

use reqwest::{
    self,
    header::{ACCEPT, USER_AGENT},
    Client, Response, Url,
};
use serde::Serialize;

use crate::errors::http_error::{HttpError, HttpResult};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(50);

lazy_static! {
    static ref HTTP_CLIENT: Option<Client> = {
        match reqwest::ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .pool_idle_timeout(Some(Duration::from_secs(4)))
            .build()
        {
            Ok(client) => Some(client),
            Err(err) => {
                error!("Building reqwest client failed: {:?}", err);
                None
            }
        }
    };
}

fn http_client() -> HttpResult<&'static Client> {
    HTTP_CLIENT
        .as_ref()
        .ok_or_else(|| HttpError::from_msg("HTTP client is not available"))
}

/// Posts `body` serialized as JSON and returns the raw response body.
pub async fn post_json<T>(body: &T, url: &Url) -> HttpResult<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    debug!("post_json >> http client sending request POST {}", url);

    let response = http_client()?
        .post(url.clone())
        .json(body)
        .header(ACCEPT, "application/json")
        .header(USER_AGENT, "reqwest")
        .send()
        .await
        .map_err(|err| HttpError::from_msg(format!("HTTP Client could not connect, err: {err}")))?;
    process_response(response).await
}

async fn process_response(response: Response) -> HttpResult<Vec<u8>> {
    let content_length = response.content_length();
    let response_status = response.status();
    match response.text().await {
        Ok(payload) => {
            if response_status.is_success() {
                Ok(payload.into_bytes())
            } else {
                Err(HttpError::with_status(
                    response_status.as_u16(),
                    format!(
                        "POST failed due to non-success HTTP status: {response_status}, response body: {payload}"
                    ),
                ))
            }
        }
        Err(error) => Err(HttpError::with_status(
            response_status.as_u16(),
            format!(
                "POST failed because response could not be decoded as utf-8, HTTP status: {}, \
                 content-length header: {:?}, error: {:?}",
                response_status, content_length, error
            ),
        )),
    }
}
