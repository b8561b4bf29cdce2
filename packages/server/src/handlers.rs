//! HTTP handler functions for the hazard map API.

use actix_web::{HttpResponse, web};
use hazard_map_hazard_models::Coordinate;
use hazard_map_server_models::{ApiError, ApiFault, ApiHealth, ApiRegion, RiskQueryParams};

use crate::{AppState, to_api_assessment};

/// `GET /api/health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        regions: state.boundaries.len(),
        faults: state.engine.reference().faults().len(),
    })
}

/// `GET /api/risk?lng=&lat=`
///
/// Scores every hazard at the coordinate and attaches the nearest fault,
/// mitigation plan, and coverage gaps.
pub async fn risk(
    state: web::Data<AppState>,
    params: web::Query<RiskQueryParams>,
) -> HttpResponse {
    let coordinate = Coordinate::new(params.lng, params.lat);
    if !coordinate.is_finite() {
        log::warn!("Rejected non-finite coordinate ({}, {})", params.lng, params.lat);
        return HttpResponse::BadRequest().json(ApiError::new("lng and lat must be finite numbers"));
    }

    let assessment = state.engine.assess(coordinate, &state.boundaries);
    HttpResponse::Ok().json(to_api_assessment(assessment))
}

/// `GET /api/faults`
///
/// Lists the fault catalogue with trace geometry.
pub async fn faults(state: web::Data<AppState>) -> HttpResponse {
    let faults: Vec<ApiFault> = state
        .engine
        .reference()
        .faults()
        .iter()
        .map(|f| ApiFault::from(f.definition()))
        .collect();

    HttpResponse::Ok().json(faults)
}

/// `GET /api/regions`
///
/// Lists base hazard statistics for every region.
pub async fn regions(state: web::Data<AppState>) -> HttpResponse {
    let regions: Vec<ApiRegion> = state
        .engine
        .reference()
        .regions()
        .iter()
        .map(ApiRegion::from)
        .collect();

    HttpResponse::Ok().json(regions)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use hazard_map_spatial::RegionBoundaries;

    use crate::{AppState, configure_api};

    const SAMPLE_COUNTIES: &str = include_str!("../../risk/fixtures/sample_counties.geojson");

    fn state() -> actix_web::web::Data<AppState> {
        let boundaries = RegionBoundaries::from_geojson_str(SAMPLE_COUNTIES).unwrap();
        actix_web::web::Data::new(AppState::new(boundaries))
    }

    #[actix_web::test]
    async fn health_reports_counts() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["healthy"], true);
        assert_eq!(body["regions"], 3);
        assert_eq!(body["faults"], 17);
    }

    #[actix_web::test]
    async fn risk_for_los_angeles() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get()
            .uri("/api/risk?lng=-118.2437&lat=34.0522")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["region"], "Los Angeles");
        assert_eq!(body["earthquake"]["score"], 9.5);
        assert_eq!(body["earthquake"]["level"], "high");
        assert_eq!(body["lossEstimate"]["unprotected"], 39_188);
        assert!(body["nearestFault"]["name"].is_string());
        assert_eq!(body["mitigationPlan"]["immediate"].as_array().unwrap().len(), 5);
        assert_eq!(body["coverageGaps"].as_array().unwrap().len(), 4);
    }

    #[actix_web::test]
    async fn risk_outside_coverage() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get()
            .uri("/api/risk?lng=-130&lat=40")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["region"].is_null());
        assert_eq!(body["hurricane"]["score"], 1.5);
    }

    #[actix_web::test]
    async fn non_finite_coordinates_are_rejected() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get()
            .uri("/api/risk?lng=NaN&lat=34")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("finite"));
    }

    #[actix_web::test]
    async fn missing_coordinates_are_rejected() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get().uri("/api/risk?lng=-118").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn lists_reference_tables() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_api)).await;

        let req = test::TestRequest::get().uri("/api/faults").to_request();
        let faults: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(faults.as_array().unwrap().len(), 17);
        assert!(faults[0]["coordinates"].as_array().unwrap().len() >= 2);

        let req = test::TestRequest::get().uri("/api/regions").to_request();
        let regions: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(regions.as_array().unwrap().len(), 58);
        assert_eq!(regions[0]["name"], "Los Angeles");
    }
}
