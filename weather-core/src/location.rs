//! Work out where the user is: device position first, IP address as the fallback.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::WeatherError, geocoding::GeocodingClient, model::ResolvedLocation};

/// Outcome of asking the host for the device's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceFix {
    Located { lat: f64, lon: f64 },
    Denied,
    /// The host has no geolocation capability.
    Unavailable,
}

#[async_trait]
pub trait DeviceGeolocation: Send + Sync + Debug {
    async fn current_position(&self) -> DeviceFix;
}

/// A host without any geolocation capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeviceGeolocation;

#[async_trait]
impl DeviceGeolocation for NoDeviceGeolocation {
    async fn current_position(&self) -> DeviceFix {
        DeviceFix::Unavailable
    }
}

/// A position the host already knows, e.g. given on the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    pub lat: f64,
    pub lon: f64,
}

#[async_trait]
impl DeviceGeolocation for FixedPosition {
    async fn current_position(&self) -> DeviceFix {
        DeviceFix::Located { lat: self.lat, lon: self.lon }
    }
}

#[derive(Debug)]
pub struct LocationResolver {
    geocoder: GeocodingClient,
    device: Box<dyn DeviceGeolocation>,
}

impl LocationResolver {
    pub fn new(geocoder: GeocodingClient, device: Box<dyn DeviceGeolocation>) -> Self {
        Self { geocoder, device }
    }

    /// Resolve the user's location, trying each source at most once.
    ///
    /// Fails with [`WeatherError::LocationUnavailable`] only when the IP
    /// fallback fails too; earlier failures are logged and dropped.
    pub async fn resolve_user_location(&self) -> Result<ResolvedLocation, WeatherError> {
        match self.device.current_position().await {
            DeviceFix::Located { lat, lon } => match self.geocoder.reverse_geocode(lat, lon).await {
                Ok(location) => {
                    tracing::info!(name = %location.name, "resolved location from device position");
                    return Ok(location);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "reverse geocoding failed, falling back to IP lookup");
                }
            },
            DeviceFix::Denied => {
                tracing::debug!("device geolocation denied, falling back to IP lookup");
            }
            DeviceFix::Unavailable => {
                tracing::debug!("device geolocation unavailable, falling back to IP lookup");
            }
        }

        match self.geocoder.locate_by_ip().await {
            Ok(location) => {
                tracing::info!(name = %location.name, "resolved location from IP address");
                Ok(location)
            }
            Err(e) => Err(WeatherError::LocationUnavailable { source: Box::new(e) }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug)]
    struct DeniedDevice;

    #[async_trait]
    impl DeviceGeolocation for DeniedDevice {
        async fn current_position(&self) -> DeviceFix {
            DeviceFix::Denied
        }
    }

    fn resolver(server: &MockServer, device: Box<dyn DeviceGeolocation>) -> LocationResolver {
        let endpoints = Endpoints {
            weather_url: format!("{}/data/2.5", server.uri()),
            geocoding_url: format!("{}/geo/1.0", server.uri()),
            ip_url: format!("{}/json/", server.uri()),
        };
        LocationResolver::new(GeocodingClient::new("KEY".into(), &endpoints), device)
    }

    async fn mount_ip(server: &MockServer, body: serde_json::Value, calls: u64) {
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(calls)
            .mount(server)
            .await;
    }

    fn ip_success() -> serde_json::Value {
        json!({
            "status": "success",
            "country": "Ukraine",
            "countryCode": "UA",
            "city": "Kharkiv",
            "lat": 49.99,
            "lon": 36.23
        })
    }

    #[tokio::test]
    async fn device_position_is_reverse_geocoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "Dnipro", "lat": 48.46, "lon": 35.04, "country": "UA"}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        mount_ip(&server, ip_success(), 0).await;

        let device = Box::new(FixedPosition { lat: 48.46, lon: 35.04 });
        let location = resolver(&server, device).resolve_user_location().await.unwrap();

        assert_eq!(location.name, "Dnipro");
    }

    #[tokio::test]
    async fn denied_device_falls_back_to_ip_once() {
        let server = MockServer::start().await;
        mount_ip(&server, ip_success(), 1).await;

        let location = resolver(&server, Box::new(DeniedDevice)).resolve_user_location().await.unwrap();

        assert_eq!(location.name, "Kharkiv");
        assert_eq!(location.lat, 49.99);
    }

    #[tokio::test]
    async fn missing_device_falls_back_to_ip_once() {
        let server = MockServer::start().await;
        mount_ip(&server, ip_success(), 1).await;

        let location =
            resolver(&server, Box::new(NoDeviceGeolocation)).resolve_user_location().await.unwrap();

        assert_eq!(location.name, "Kharkiv");
    }

    #[tokio::test]
    async fn geocoding_failure_falls_back_to_ip() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        mount_ip(&server, ip_success(), 1).await;

        let device = Box::new(FixedPosition { lat: 0.0, lon: 0.0 });
        let location = resolver(&server, device).resolve_user_location().await.unwrap();

        assert_eq!(location.name, "Kharkiv");
    }

    #[tokio::test]
    async fn ip_failure_makes_location_unavailable() {
        let server = MockServer::start().await;
        mount_ip(&server, json!({"status": "fail", "message": "private range"}), 1).await;

        let err =
            resolver(&server, Box::new(DeniedDevice)).resolve_user_location().await.unwrap_err();

        match err {
            WeatherError::LocationUnavailable { source } => {
                assert!(matches!(*source, WeatherError::IpLocationFailed { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
