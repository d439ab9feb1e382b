use axum::{
    Router,
    extract::{
        Json, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::core::{
    AllocationModel, EngineError, Experience, InvestmentGoal, Recommendation, RiskCategory,
    UserProfile,
    allocation_for, evaluate_risk_profile, expected_return_percent,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliExperience {
    Low,
    Medium,
    High,
}

impl From<CliExperience> for Experience {
    fn from(value: CliExperience) -> Self {
        match value {
            CliExperience::Low => Experience::Low,
            CliExperience::Medium => Experience::Medium,
            CliExperience::High => Experience::High,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliGoal {
    CapitalPreservation,
    Balanced,
    Growth,
    AggressiveGrowth,
}

impl From<CliGoal> for InvestmentGoal {
    fn from(value: CliGoal) -> Self {
        match value {
            CliGoal::CapitalPreservation => InvestmentGoal::CapitalPreservation,
            CliGoal::Balanced => InvestmentGoal::Balanced,
            CliGoal::Growth => InvestmentGoal::Growth,
            CliGoal::AggressiveGrowth => InvestmentGoal::AggressiveGrowth,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiExperience {
    #[serde(alias = "beginner")]
    Low,
    #[serde(alias = "intermediate")]
    Medium,
    #[serde(alias = "advanced")]
    High,
}

impl From<ApiExperience> for CliExperience {
    fn from(value: ApiExperience) -> Self {
        match value {
            ApiExperience::Low => CliExperience::Low,
            ApiExperience::Medium => CliExperience::Medium,
            ApiExperience::High => CliExperience::High,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiGoal {
    #[serde(
        alias = "capitalPreservation",
        alias = "capital_preservation",
        alias = "conservative"
    )]
    CapitalPreservation,
    Balanced,
    Growth,
    #[serde(alias = "aggressiveGrowth", alias = "aggressive_growth")]
    AggressiveGrowth,
}

impl From<ApiGoal> for CliGoal {
    fn from(value: ApiGoal) -> Self {
        match value {
            ApiGoal::CapitalPreservation => CliGoal::CapitalPreservation,
            ApiGoal::Balanced => CliGoal::Balanced,
            ApiGoal::Growth => CliGoal::Growth,
            ApiGoal::AggressiveGrowth => CliGoal::AggressiveGrowth,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EvaluatePayload {
    age: Option<u32>,
    experience: Option<ApiExperience>,
    years_to_horizon: Option<u32>,
    income_need_percent: Option<f64>,
    risk_tolerance: Option<u32>,
    goal: Option<ApiGoal>,
    monthly_contribution: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "riskfolio evaluate",
    about = "Score an investor profile and recommend a model portfolio"
)]
struct Cli {
    #[arg(long, default_value_t = 35)]
    age: u32,
    #[arg(long, value_enum, default_value_t = CliExperience::Medium)]
    experience: CliExperience,
    #[arg(
        long,
        default_value_t = 20,
        help = "Years until the money is needed (e.g. retirement)"
    )]
    years_to_horizon: u32,
    #[arg(
        long,
        default_value_t = 50.0,
        help = "Share of income expected to come from investments, 0-100"
    )]
    income_need_percent: f64,
    #[arg(long, default_value_t = 5, help = "Self-assessed risk tolerance, 1-10")]
    risk_tolerance: u32,
    #[arg(long, value_enum, default_value_t = CliGoal::Growth)]
    goal: CliGoal,
    #[arg(
        long,
        default_value_t = 10_000.0,
        help = "Amount invested every month"
    )]
    monthly_contribution: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateResponse<'a> {
    profile: &'a UserProfile,
    #[serde(flatten)]
    recommendation: &'a Recommendation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AllocationResponse {
    #[serde(flatten)]
    model: AllocationModel,
    expected_return_percent: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Error, Debug)]
pub enum CommandError {
    /// Bad flags, or a `--help`/`--version` request; `clap::Error::exit` prints it.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Evaluation(#[from] EngineError),
    #[error("failed to encode recommendation: {0}")]
    Encode(#[from] serde_json::Error),
}

fn build_profile(cli: &Cli) -> UserProfile {
    UserProfile {
        age: cli.age,
        experience: cli.experience.into(),
        years_to_horizon: cli.years_to_horizon,
        income_need_percent: cli.income_need_percent,
        risk_tolerance: cli.risk_tolerance,
        goal: cli.goal.into(),
        monthly_contribution: cli.monthly_contribution,
    }
}

/// Parses `evaluate` flags, runs the engine and returns the bundle as pretty JSON.
///
/// The first item of `args` is treated as the program name.
pub fn run_evaluate_command<I, T>(args: I) -> Result<String, CommandError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let profile = build_profile(&cli);
    let recommendation = evaluate_risk_profile(&profile)?;
    let json = serde_json::to_string_pretty(&EvaluateResponse {
        profile: &profile,
        recommendation: &recommendation,
    })?;
    Ok(json)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router();

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "riskfolio HTTP API listening");
    info!("local access: http://127.0.0.1:{port}/api/evaluate");

    axum::serve(listener, app).await
}

fn router() -> Router {
    Router::new()
        .route(
            "/api/evaluate",
            get(evaluate_get_handler).post(evaluate_post_handler),
        )
        .route("/api/allocations/:category", get(allocation_handler))
        .fallback(not_found_handler)
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn evaluate_get_handler(
    payload: Result<Query<EvaluatePayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => evaluate_handler_impl(payload).await,
        Err(rejection) => rejected_payload(rejection.body_text()),
    }
}

async fn evaluate_post_handler(
    payload: Result<Json<EvaluatePayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => evaluate_handler_impl(payload).await,
        Err(rejection) => rejected_payload(rejection.body_text()),
    }
}

fn rejected_payload(reason: String) -> Response {
    warn!(error = %reason, "rejected malformed evaluation payload");
    error_response(StatusCode::BAD_REQUEST, &reason)
}

async fn evaluate_handler_impl(payload: EvaluatePayload) -> Response {
    let profile = profile_from_payload(payload);
    match evaluate_risk_profile(&profile) {
        Ok(recommendation) => json_response(
            StatusCode::OK,
            EvaluateResponse {
                profile: &profile,
                recommendation: &recommendation,
            },
        ),
        Err(e) => {
            warn!(error = %e, "rejected evaluation request");
            error_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
    }
}

async fn allocation_handler(Path(category): Path<String>) -> Response {
    let category = match category.parse::<RiskCategory>() {
        Ok(category) => category,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let model = allocation_for(category);
    let expected_return_percent = expected_return_percent(&model);
    json_response(
        StatusCode::OK,
        AllocationResponse {
            model,
            expected_return_percent,
        },
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn profile_from_json(json: &str) -> Result<UserProfile, String> {
    let payload = serde_json::from_str::<EvaluatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    Ok(profile_from_payload(payload))
}

fn profile_from_payload(payload: EvaluatePayload) -> UserProfile {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.age {
        cli.age = v;
    }
    if let Some(v) = payload.experience {
        cli.experience = v.into();
    }
    if let Some(v) = payload.years_to_horizon {
        cli.years_to_horizon = v;
    }
    if let Some(v) = payload.income_need_percent {
        cli.income_need_percent = v;
    }
    if let Some(v) = payload.risk_tolerance {
        cli.risk_tolerance = v;
    }
    if let Some(v) = payload.goal {
        cli.goal = v.into();
    }
    if let Some(v) = payload.monthly_contribution {
        cli.monthly_contribution = v;
    }

    build_profile(&cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        age: 35,
        experience: CliExperience::Medium,
        years_to_horizon: 20,
        income_need_percent: 50.0,
        risk_tolerance: 5,
        goal: CliGoal::Growth,
        monthly_contribution: 10_000.0,
    }
}
