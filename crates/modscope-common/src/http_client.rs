//! Transport seam between the GraphQL layer and the network.

use std::future::Future;
use std::sync::Arc;

/// Something that can carry one buffered HTTP exchange.
///
/// GraphQL calls and the healthcare reviews collaborator reach the network
/// only through this trait, so tests swap in an in-memory server.
#[cfg_attr(not(target_arch = "wasm32"), trait_variant::make(Send))]
pub trait HttpClient {
    /// Failure reported by the transport itself (no response at all)
    type Error: std::error::Error + Send + Sync + 'static;

    /// POST (or otherwise send) `request` and buffer the whole response.
    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = Result<http::Response<Vec<u8>>, Self::Error>>;
}

#[cfg(feature = "reqwest-client")]
impl HttpClient for reqwest::Client {
    type Error = reqwest::Error;

    async fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Vec<u8>>, Self::Error> {
        let response = self.execute(reqwest::Request::try_from(request)?).await?;

        let mut buffered = http::Response::new(Vec::new());
        *buffered.status_mut() = response.status();
        *buffered.headers_mut() = response.headers().clone();
        *buffered.body_mut() = response.bytes().await?.to_vec();
        Ok(buffered)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<T: HttpClient + Sync> HttpClient for Arc<T> {
    type Error = T::Error;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = Result<http::Response<Vec<u8>>, Self::Error>> + Send {
        (**self).send_http(request)
    }
}

#[cfg(target_arch = "wasm32")]
impl<T: HttpClient> HttpClient for Arc<T> {
    type Error = T::Error;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = Result<http::Response<Vec<u8>>, Self::Error>> {
        (**self).send_http(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl HttpClient for Echo {
        type Error = std::convert::Infallible;

        async fn send_http(
            &self,
            request: http::Request<Vec<u8>>,
        ) -> Result<http::Response<Vec<u8>>, Self::Error> {
            Ok(http::Response::new(request.into_body()))
        }
    }

    #[tokio::test]
    async fn shared_client_forwards_to_inner() {
        let shared = Arc::new(Echo);
        let response = shared
            .send_http(http::Request::new(b"{\"query\":\"{ ping }\"}".to_vec()))
            .await
            .unwrap();
        assert_eq!(response.body(), b"{\"query\":\"{ ping }\"}");
    }
}
