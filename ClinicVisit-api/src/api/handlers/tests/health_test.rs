#[cfg(test)]
mod health_tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse, Extension};
    use clinic_visit_domain::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus};

    use crate::api::handlers::health::{health_check, HealthResponse, HealthService};
    use crate::config::ApiConfig;

    // Mock health service with a configurable reference_data component
    #[derive(Debug)]
    struct TestMockHealthService {
        system_status: SystemStatus,
        components: HashMap<String, HealthComponent>,
    }

    impl TestMockHealthService {
        fn new() -> Self {
            let mut components = HashMap::new();
            components.insert(
                "reference_data".to_string(),
                HealthComponent {
                    status: ComponentStatus::Healthy,
                    details: None,
                },
            );

            Self {
                system_status: SystemStatus::Healthy,
                components,
            }
        }

        fn with_reference_data(mut self, status: ComponentStatus, details: &str) -> Self {
            self.components.insert(
                "reference_data".to_string(),
                HealthComponent {
                    status,
                    details: Some(details.to_string()),
                },
            );
            self
        }

        fn with_system_status(mut self, status: SystemStatus) -> Self {
            self.system_status = status;
            self
        }

        fn without_components(mut self) -> Self {
            self.components.clear();
            self
        }
    }

    impl HealthServiceTrait for TestMockHealthService {
        fn get_system_health(&self) -> SystemHealth {
            SystemHealth {
                status: self.system_status.clone(),
                components: self.components.clone(),
            }
        }

        fn check_reference_data(&self) -> Result<(), Vec<String>> {
            match self.components.get("reference_data") {
                Some(component) if component.status == ComponentStatus::Healthy => Ok(()),
                Some(component) => Err(component.details.clone().into_iter().collect()),
                None => Err(vec!["reference_data component missing".to_string()]),
            }
        }
    }

    async fn call(service: TestMockHealthService) -> (StatusCode, HealthResponse) {
        let service: HealthService = Arc::new(service);
        let config = Arc::new(ApiConfig {
            environment: "test".to_string(),
            ..ApiConfig::default()
        });

        let response = health_check(Extension(service), Extension(config)).await.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_check_healthy() {
        let (status, body) = call(TestMockHealthService::new()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.environment, "test");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.components.reference_data.status, "ok");
        assert!(body.components.reference_data.message.is_none());
        assert_eq!(body.components.api.status, "ok");
    }

    #[tokio::test]
    async fn test_health_check_degraded() {
        let service = TestMockHealthService::new()
            .with_reference_data(ComponentStatus::Degraded, "pulse bands overlap")
            .with_system_status(SystemStatus::Degraded);

        let (status, body) = call(service).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.components.reference_data.status, "degraded");
        assert_eq!(body.components.reference_data.message.as_deref(), Some("pulse bands overlap"));
    }

    #[tokio::test]
    async fn test_health_check_unhealthy() {
        let service = TestMockHealthService::new()
            .with_reference_data(ComponentStatus::Unhealthy, "unknown status label")
            .with_system_status(SystemStatus::Unhealthy);

        let (status, body) = call(service).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.status, "error");
        assert_eq!(body.components.reference_data.status, "error");
    }

    #[tokio::test]
    async fn test_missing_component_reported_as_error() {
        let (status, body) = call(TestMockHealthService::new().without_components()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.components.reference_data.status, "error");
    }

    #[test]
    fn test_mock_usable_as_trait_object() {
        let service: Arc<dyn HealthServiceTrait + Send + Sync> = Arc::new(
            TestMockHealthService::new().with_reference_data(ComponentStatus::Degraded, "duplicate register"),
        );

        assert_eq!(service.check_reference_data(), Err(vec!["duplicate register".to_string()]));
    }
}
