use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Currency a fee is quoted in. RMB is the home currency of every breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    #[default]
    Rmb,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Rmb => "RMB",
        }
    }
}

/// Billing basis of a fee line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeBasis {
    PerContainer,
    #[default]
    PerShipment,
    /// Declared for parameter-style lines; no subtotal collects these.
    Parameter,
}

impl FeeBasis {
    pub fn label(&self) -> &'static str {
        match self {
            FeeBasis::PerContainer => "按柜计费",
            FeeBasis::PerShipment => "按票计费",
            FeeBasis::Parameter => "参数",
        }
    }
}

/// Which container count a per-container fee scales with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerClass {
    Gp20,
    Gp40,
    #[default]
    Any,
}

impl ContainerClass {
    /// Infers the class from a fee code by its "20" / "40" naming convention.
    /// "20" wins when a code carries both.
    pub fn infer_from_code(code: &str) -> Self {
        if code.contains("20") {
            ContainerClass::Gp20
        } else if code.contains("40") {
            ContainerClass::Gp40
        } else {
            ContainerClass::Any
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContainerClass::Gp20 => "20GP",
            ContainerClass::Gp40 => "40GP/HQ",
            ContainerClass::Any => "All",
        }
    }
}

/// Serialized in camelCase; the snake_case aliases keep `quote.toml` files readable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    #[serde(alias = "gp20_count")]
    pub gp20_count: u32,
    #[serde(alias = "gp40_count")]
    pub gp40_count: u32,
    /// Home-currency units per USD.
    #[serde(alias = "exchange_rate")]
    pub exchange_rate: Decimal,
}

impl Parameters {
    pub fn total_containers(&self) -> u32 {
        self.gp20_count.saturating_add(self.gp40_count)
    }

    pub fn containers_for(&self, class: ContainerClass) -> u32 {
        match class {
            ContainerClass::Gp20 => self.gp20_count,
            ContainerClass::Gp40 => self.gp40_count,
            ContainerClass::Any => self.total_containers(),
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gp20_count: 1,
            gp40_count: 1,
            exchange_rate: dec!(7.1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeItem {
    pub id: String,
    #[serde(rename = "type")]
    pub basis: FeeBasis,
    pub code: String,
    pub name: String,
    pub unit_price: Decimal,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub container_class: ContainerClass,
}

impl FeeItem {
    /// Builds a fee line, tagging its container class from the code.
    pub fn new(
        id: impl Into<String>,
        basis: FeeBasis,
        code: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        currency: Currency,
    ) -> Self {
        let code = code.into();
        let container_class = ContainerClass::infer_from_code(&code);
        Self {
            id: id.into(),
            basis,
            code,
            name: name.into(),
            unit_price,
            currency,
            description: None,
            container_class,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_container_class(mut self, class: ContainerClass) -> Self {
        self.container_class = class;
        self
    }
}

/// A fee line with its amounts for the current parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedItem {
    #[serde(flatten)]
    pub fee: FeeItem,
    pub original_amount: Decimal,
    pub rmb_amount: Decimal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    #[default]
    Draft,
    Submitted,
    Reviewed,
}

/// Snapshot of a supplier quote: the engine inputs plus bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub supplier_name: String,
    pub route: String,
    pub params: Parameters,
    pub items: Vec<FeeItem>,
    pub status: QuoteStatus,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_container_class_from_code() {
        assert_eq!(ContainerClass::infer_from_code("THC-20"), ContainerClass::Gp20);
        assert_eq!(ContainerClass::infer_from_code("THC-40"), ContainerClass::Gp40);
        assert_eq!(ContainerClass::infer_from_code("OF"), ContainerClass::Any);
        assert_eq!(ContainerClass::infer_from_code("PICKUP"), ContainerClass::Any);
        // substring match, so "20" anywhere counts and beats "40"
        assert_eq!(ContainerClass::infer_from_code("X4020"), ContainerClass::Gp20);
    }

    #[test]
    fn explicit_class_overrides_inference() {
        let fee = FeeItem::new("9", FeeBasis::PerContainer, "SEAL", "Seal", dec!(30), Currency::Rmb)
            .with_container_class(ContainerClass::Gp40);
        assert_eq!(fee.container_class, ContainerClass::Gp40);
    }

    #[test]
    fn containers_for_class() {
        let params = Parameters {
            gp20_count: 3,
            gp40_count: 2,
            exchange_rate: dec!(7.1),
        };
        assert_eq!(params.containers_for(ContainerClass::Gp20), 3);
        assert_eq!(params.containers_for(ContainerClass::Gp40), 2);
        assert_eq!(params.containers_for(ContainerClass::Any), 5);
    }

    #[test]
    fn enums_serialize_with_wire_names() {
        assert_eq!(serde_json::to_string(&FeeBasis::PerContainer).unwrap(), "\"per_container\"");
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        assert_eq!(serde_json::to_string(&ContainerClass::Gp20).unwrap(), "\"gp20\"");
    }

    #[test]
    fn records_use_camel_case_field_names() {
        let fee = FeeItem::new("2", FeeBasis::PerContainer, "THC-20", "20GP码头操作费", dec!(850), Currency::Rmb);
        let value = serde_json::to_value(&fee).unwrap();
        assert_eq!(value["type"], "per_container");
        assert_eq!(value["unitPrice"], 850.0);
        assert_eq!(value["containerClass"], "gp20");
        assert!(value.get("description").is_none());
        assert!(value.get("basis").is_none());

        let params = serde_json::to_value(Parameters::default()).unwrap();
        assert_eq!(params["gp20Count"], 1);
        assert!((params["exchangeRate"].as_f64().unwrap() - 7.1).abs() < 1e-9);
    }

    #[test]
    fn fee_record_reads_back_without_container_class() {
        let fee: FeeItem = serde_json::from_str(
            r#"{"id":"4","type":"per_shipment","code":"DOC","name":"文件费","unitPrice":500,"currency":"RMB"}"#,
        )
        .unwrap();
        assert_eq!(fee.basis, FeeBasis::PerShipment);
        assert_eq!(fee.unit_price, dec!(500));
        assert_eq!(fee.container_class, ContainerClass::Any);
    }

    #[test]
    fn parameters_accept_both_key_styles() {
        let camel: Parameters =
            serde_json::from_str(r#"{"gp20Count":2,"gp40Count":3,"exchangeRate":7.2}"#).unwrap();
        let snake: Parameters =
            serde_json::from_str(r#"{"gp20_count":2,"gp40_count":3,"exchange_rate":7.2}"#).unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.gp40_count, 3);
    }
}
