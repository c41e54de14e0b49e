//! Username/password login against the backend.
//!
//! Success is decided by the HTTP status alone. The response body (and the
//! session cookie it sets) is ignored: the browser runs its own session once
//! the shell hands over to the web application.

use tracing::{debug, info};

use crate::config::ShellConfig;
use crate::traits::{Headers, HttpClient, HttpError};

/// How the backend answered a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 2xx
    Accepted,
    /// Anything else, bad credentials included
    Rejected { status: u16 },
}

impl LoginOutcome {
    pub fn is_accepted(self) -> bool {
        self == LoginOutcome::Accepted
    }
}

/// Client for `POST /api/method/login`.
pub struct LoginClient<H> {
    http: H,
    login_url: String,
}

impl<H: HttpClient> LoginClient<H> {
    pub fn new(http: H, config: &ShellConfig) -> Self {
        Self {
            http,
            login_url: config.login_url(),
        }
    }

    /// Submit form-encoded credentials.
    ///
    /// Transport failures are `Err`; every HTTP answer is `Ok`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, HttpError> {
        let body = encode_credentials(email, password);

        let mut headers = Headers::new();
        headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );

        debug!(url = %self.login_url, email = %email, "Submitting login");
        let response = self.http.post(&self.login_url, &body, &headers).await?;

        if response.is_success() {
            info!(email = %email, "Login accepted");
            Ok(LoginOutcome::Accepted)
        } else {
            info!(email = %email, status = response.status, "Login rejected");
            Ok(LoginOutcome::Rejected {
                status: response.status,
            })
        }
    }
}

/// `usr=<email>&pwd=<password>`, both percent-encoded.
pub fn encode_credentials(email: &str, password: &str) -> String {
    format!(
        "usr={}&pwd={}",
        urlencoding::encode(email),
        urlencoding::encode(password)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};

    const LOGIN_URL: &str = "http://erp.test/api/method/login";

    fn client(http: &MockHttpClient) -> LoginClient<MockHttpClient> {
        LoginClient::new(http.clone(), &ShellConfig::new().with_base_url("http://erp.test"))
    }

    #[test]
    fn test_encode_credentials() {
        assert_eq!(encode_credentials("a@x.com", "secret"), "usr=a%40x.com&pwd=secret");
        assert_eq!(
            encode_credentials("a+b@x.com", "p&w=d ?"),
            "usr=a%2Bb%40x.com&pwd=p%26w%3Dd%20%3F"
        );
    }

    #[tokio::test]
    async fn test_login_accepted() {
        let http = MockHttpClient::new();
        http.push_response("POST", LOGIN_URL, MockResponse::status(200));

        let outcome = client(&http).login("a@x.com", "secret").await.unwrap();
        assert_eq!(outcome, LoginOutcome::Accepted);

        let requests = http.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, LOGIN_URL);
        assert_eq!(requests[0].body.as_deref(), Some("usr=a%40x.com&pwd=secret"));
        assert_eq!(
            requests[0].headers.get("Content-Type"),
            Some(&"application/x-www-form-urlencoded".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let http = MockHttpClient::new();
        http.push_response("POST", LOGIN_URL, MockResponse::status(401));

        let outcome = client(&http).login("a@x.com", "wrong").await.unwrap();
        assert_eq!(outcome, LoginOutcome::Rejected { status: 401 });
        assert!(!outcome.is_accepted());
    }

    #[tokio::test]
    async fn test_login_transport_error() {
        let http = MockHttpClient::new();
        http.push_response(
            "POST",
            LOGIN_URL,
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client(&http).login("a@x.com", "secret").await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }
}
