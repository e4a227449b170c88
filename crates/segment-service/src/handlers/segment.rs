//! 分群评估处理器

use crate::dto::{EvaluateSegmentRequest, EvaluateSegmentResponse};
use crate::error::SegmentError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use segment_engine::{EvaluationResult, RuleParser, SegmentExecutor};
use tracing::info;
use validator::Validate;

/// POST /api/segments/evaluate
///
/// 规则解析先于目录拉取：规则本身有误时不必访问商品服务。
pub async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateSegmentRequest>,
) -> Result<Json<EvaluateSegmentResponse>, SegmentError> {
    request.validate()?;

    let conditions = RuleParser::parse(&request.rules)?;
    let products = state.catalog.fetch_products().await?;
    let total = products.len();

    let data = SegmentExecutor::filter(products, &conditions);
    let result = EvaluationResult::new(conditions, data);

    info!(
        conditions = result.conditions.len(),
        total,
        matched = result.count,
        "Segment evaluated"
    );

    Ok(Json(result.into()))
}
