#[cfg(test)]
mod vitals_tests {
    use axum::{
        body::to_bytes,
        extract::{Json, Query},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use serde_json::Value;

    use crate::api::handlers::vitals::{assess_vitals, get_age, get_reference_ranges};
    use crate::entities::vitals::{AgeQueryParams, ReferenceQueryParams, VitalsRequest};

    async fn body_json(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn unwrap_response<T: IntoResponse>(result: Result<T, Response>) -> Response {
        match result {
            Ok(ok) => ok.into_response(),
            Err(err) => err,
        }
    }

    #[tokio::test]
    async fn test_assess_vitals_classifies_every_field() {
        let request = VitalsRequest {
            height_cm: Some("170".to_string()),
            weight_kg: Some("65".to_string()),
            systolic: Some("110".to_string()),
            diastolic: Some("70".to_string()),
            pulse: Some("72".to_string()),
            temperature_f: Some("98.6".to_string()),
            spo2: Some("98".to_string()),
            respiratory_rate: Some("16".to_string()),
        };

        let response = unwrap_response(assess_vitals(Json(request)).await);
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["bmi"]["status"], "Normal weight");
        assert_eq!(body["bmi_display"], "22.5");
        assert_eq!(body["blood_pressure"]["status"], "Normal");
        assert_eq!(body["blood_pressure"]["meter"]["tone"], "green");
        assert_eq!(body["pulse"]["status"], "Normal");
        assert_eq!(body["temperature"]["status"], "Normal");
        assert_eq!(body["spo2"]["status"], "Normal");
        assert_eq!(body["respiratory_rate"]["status"], "Normal");
        assert!(body["mean_arterial_pressure"].is_number());
    }

    #[tokio::test]
    async fn test_assess_vitals_boundary_pair_is_high_normal() {
        let request = VitalsRequest {
            systolic: Some("120".to_string()),
            diastolic: Some("80".to_string()),
            ..VitalsRequest::default()
        };

        let body = body_json(unwrap_response(assess_vitals(Json(request)).await)).await;
        assert_eq!(body["blood_pressure"]["status"], "High Normal (Prehypertension)");
        assert_eq!(body["blood_pressure"]["meter"]["tone"], "yellow");
    }

    #[tokio::test]
    async fn test_assess_vitals_empty_form() {
        let response = unwrap_response(assess_vitals(Json(VitalsRequest::default())).await);
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["bmi"]["status"], "");
        assert_eq!(body["bmi_display"], "");
        assert_eq!(body["blood_pressure"]["status"], "");
        assert!(body["mean_arterial_pressure"].is_null());
    }

    #[tokio::test]
    async fn test_assess_vitals_rejects_oversized_field() {
        let request = VitalsRequest {
            pulse: Some("9".repeat(64)),
            ..VitalsRequest::default()
        };

        let response = unwrap_response(assess_vitals(Json(request)).await);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert!(body["details"]["pulse"].is_array());
    }

    #[tokio::test]
    async fn test_get_age_with_as_of() {
        let params = AgeQueryParams {
            dob: "15-08-1990".to_string(),
            as_of: Some("2024-08-14".to_string()),
        };

        let body = body_json(unwrap_response(get_age(Query(params)).await)).await;
        assert_eq!(body["age"], 33);
        assert_eq!(body["as_of"], "2024-08-14");
    }

    #[tokio::test]
    async fn test_get_age_unreadable_dob_is_null() {
        let params = AgeQueryParams {
            dob: "not a date".to_string(),
            as_of: Some("2024-01-01".to_string()),
        };

        let response = unwrap_response(get_age(Query(params)).await);
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["age"].is_null());
    }

    #[tokio::test]
    async fn test_get_age_rejects_bad_as_of() {
        let params = AgeQueryParams {
            dob: "1990-01-01".to_string(),
            as_of: Some("01/01/2024".to_string()),
        };

        let response = unwrap_response(get_age(Query(params)).await);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reference_ranges_for_bmi() {
        let params = ReferenceQueryParams { kind: "bmi".to_string() };

        let response = unwrap_response(get_reference_ranges(Query(params)).await);
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let ranges = body["ranges"].as_array().unwrap();
        assert!(!ranges.is_empty());
        assert!(ranges.iter().all(|row| row["range"].is_string() && row["classification"].is_string()));
    }

    #[tokio::test]
    async fn test_reference_ranges_unknown_kind() {
        let params = ReferenceQueryParams { kind: "glucose".to_string() };

        let response = unwrap_response(get_reference_ranges(Query(params)).await);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "bad_request");
    }
}
