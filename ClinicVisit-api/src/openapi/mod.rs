use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Vitals endpoints
        crate::api::handlers::vitals::assess_vitals,
        crate::api::handlers::vitals::get_age,
        crate::api::handlers::vitals::get_reference_ranges,

        // Register endpoints
        crate::api::handlers::registers::get_register_options,
        crate::api::handlers::registers::get_purpose,
        crate::api::handlers::registers::get_visible_tabs,
        crate::api::handlers::registers::validate_visit
    ),
    components(
        schemas(
            crate::entities::common::ErrorResponse,

            // Vitals
            crate::entities::vitals::VitalsRequest,
            crate::entities::vitals::VitalsAssessmentResponse,
            crate::entities::vitals::MeasurementResponse,
            crate::entities::vitals::MeterResponse,
            crate::entities::vitals::AgeResponse,
            crate::entities::vitals::ReferenceRow,
            crate::entities::vitals::ReferenceRangesResponse,

            // Registers
            crate::entities::registers::RegisterOption,
            crate::entities::registers::RegisterOptionsResponse,
            crate::entities::registers::PurposeResponse,
            crate::entities::registers::TabResponse,
            crate::entities::registers::TabsResponse,
            crate::entities::registers::VisitValidationRequest,
            crate::entities::registers::VisitValidationResponse,

            // Health
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "vitals", description = "Vitals classification and derived metrics"),
        (name = "registers", description = "Register, purpose and tab resolution")
    ),
    info(
        title = "Clinic Visit API",
        version = "0.1.0",
        description = "Vitals classification and visit intake rules for occupational-health clinics",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
