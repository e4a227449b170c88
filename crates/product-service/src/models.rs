//! 商品领域模型与上游 DTO

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// 本地镜像的商品记录
///
/// 字段集即规则引擎可见的记录字段；序列化后作为扁平 JSON 对象
/// 提供给 segment-service。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub stock_status: String,
    pub stock_quantity: Option<i64>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub on_sale: bool,
    pub created_at: DateTime<Utc>,
}

/// WooCommerce 商品 DTO
///
/// 只取同步所需字段，其余忽略。price 在上游是字符串。
#[derive(Debug, Clone, Deserialize)]
pub struct WcProduct {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock_status: String,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub categories: Vec<WcTerm>,
    #[serde(default)]
    pub tags: Vec<WcTerm>,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub date_created: Option<String>,
}

/// WooCommerce 分类/标签条目
#[derive(Debug, Clone, Deserialize)]
pub struct WcTerm {
    pub name: String,
}

impl From<WcProduct> for Product {
    fn from(wc: WcProduct) -> Self {
        Self {
            id: wc.id,
            title: wc.name,
            // 上游价格串可能为空或非法，按 0 处理而不是丢弃整条商品
            price: wc.price.parse().unwrap_or(0.0),
            stock_status: wc.stock_status,
            stock_quantity: wc.stock_quantity,
            category: wc.categories.into_iter().next().map(|c| c.name),
            tags: wc.tags.into_iter().map(|t| t.name).collect(),
            on_sale: wc.on_sale,
            created_at: wc
                .date_created
                .as_deref()
                .and_then(parse_wc_datetime)
                .unwrap_or_else(Utc::now),
        }
    }
}

/// 解析 WooCommerce 的时间格式
///
/// 上游可能返回带时区的 RFC 3339，也可能返回站点本地时间
/// （如 "2024-03-01T08:00:00"），后者按 UTC 处理。
fn parse_wc_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wc_fixture() -> WcProduct {
        serde_json::from_value(json!({
            "id": 101,
            "name": "Trail Running Shoes",
            "price": "89.99",
            "stock_status": "instock",
            "stock_quantity": 12,
            "categories": [{"id": 1, "name": "Shoes"}, {"id": 2, "name": "Outdoor"}],
            "tags": [{"id": 9, "name": "summer"}],
            "on_sale": true,
            "date_created": "2024-03-01T08:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_mapping_takes_first_category_and_tag_names() {
        let product: Product = wc_fixture().into();
        assert_eq!(product.id, 101);
        assert_eq!(product.price, 89.99);
        assert_eq!(product.category.as_deref(), Some("Shoes"));
        assert_eq!(product.tags, vec!["summer".to_string()]);
        assert!(product.on_sale);
    }

    #[test]
    fn test_unparsable_price_defaults_to_zero() {
        let mut wc = wc_fixture();
        wc.price = String::new();
        let product: Product = wc.into();
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_missing_optional_upstream_fields() {
        let wc: WcProduct = serde_json::from_value(json!({
            "id": 7,
            "name": "Bare Product"
        }))
        .unwrap();
        let product: Product = wc.into();
        assert_eq!(product.category, None);
        assert!(product.tags.is_empty());
        assert!(!product.on_sale);
        assert_eq!(product.stock_quantity, None);
    }

    #[test]
    fn test_datetime_parsing_both_formats() {
        assert!(parse_wc_datetime("2024-03-01T08:00:00Z").is_some());
        assert!(parse_wc_datetime("2024-03-01T08:00:00").is_some());
        assert!(parse_wc_datetime("not a date").is_none());
    }

    #[test]
    fn test_product_serializes_flat_record() {
        let product: Product = wc_fixture().into();
        let record = serde_json::to_value(&product).unwrap();
        assert_eq!(record["stock_status"], json!("instock"));
        assert_eq!(record["tags"], json!(["summer"]));
    }
}
