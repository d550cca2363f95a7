//! Rate limiting middleware for sensitive endpoints.
//!
//! Fixed-window counter per client IP, kept in process. The counter map is
//! middleware-internal bookkeeping; domain state never lives here.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorTooManyRequests,
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    collections::HashMap,
    future::{ready, Ready},
    rc::Rc,
    sync::{Arc, Mutex},
    task::{Context, Poll},
    time::{Duration, Instant},
};

use ch_shared::config::RateLimitConfig;

/// Fixed detail returned on violation
const RATE_LIMIT_DETAIL: &str = "Too many requests. Please try again later.";

/// One client's counter within the current window
struct WindowCounter {
    count: u32,
    window_start: Instant,
}

/// Rate limiter middleware factory
pub struct RateLimiter {
    config: RateLimitConfig,
    counters: Arc<Mutex<HashMap<String, WindowCounter>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            counters: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            config: self.config.clone(),
            counters: self.counters.clone(),
        }))
    }
}

/// Rate limiter middleware service
pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    config: RateLimitConfig,
    counters: Arc<Mutex<HashMap<String, WindowCounter>>>,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let config = self.config.clone();
        let counters = self.counters.clone();

        Box::pin(async move {
            let ip = get_client_ip(&req);
            let window = Duration::from_secs(config.window_seconds);
            let now = Instant::now();

            let allowed = {
                let mut counters = counters.lock().expect("rate limit lock poisoned");
                let counter = counters.entry(ip).or_insert(WindowCounter {
                    count: 0,
                    window_start: now,
                });

                if now.duration_since(counter.window_start) >= window {
                    counter.count = 0;
                    counter.window_start = now;
                }

                if counter.count >= config.max_requests {
                    false
                } else {
                    counter.count += 1;
                    true
                }
            };

            if !allowed {
                return Err(ErrorTooManyRequests(serde_json::json!({
                    "error": "rate_limit_exceeded",
                    "message": RATE_LIMIT_DETAIL,
                })));
            }

            service.call(req).await
        })
    }
}

/// Get client IP address from request
fn get_client_ip(req: &ServiceRequest) -> String {
    // Reverse-proxy headers take precedence over the peer address.
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            if let Some(ip) = forwarded_str.split(',').next() {
                return ip.trim().to_string();
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.9, 10.0.0.1"))
            .to_srv_request();

        assert_eq!(get_client_ip(&req), "203.0.113.9");
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip() {
        let req = TestRequest::default()
            .insert_header(("X-Real-IP", "198.51.100.4"))
            .to_srv_request();

        assert_eq!(get_client_ip(&req), "198.51.100.4");
    }
}
