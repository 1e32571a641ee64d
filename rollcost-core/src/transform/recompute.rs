//! Recomputation of derived part fields.
//!
//! Every derived value is rebuilt in dependency order (geometry, seams,
//! weld cost, line total) and only then written back, so a part never holds
//! a total computed from a stale seam or rate.

use serde::Serialize;
use serde_json::Value;

use crate::config::{ShopSettings, DEFAULT_MATERIAL_SOURCE, MATERIAL_SOURCES};
use crate::generator::{format_money, material_description, rolling_description, service_description};
use crate::geometry::{compute_for_spec, GeometryResult, PitchDescriber};
use crate::model::{Part, PartRegistry, RateEntry, WorkOrder};
use crate::parser::{parse_number, parse_quantity};
use crate::pricing::{
    apply_auto_rate, compute_line_total, compute_service_total, compute_weld_cost, resolve_weld_rate,
    LineTotal, WeldCostCalc,
};
use crate::seam::{extract_host_info, select_seam, HostInfo};

/// Derived values of an ordinary part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartPricing {
    pub geometry: Option<GeometryResult>,
    pub line: LineTotal,
}

/// Derived values of a service line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicePricing {
    pub host: Option<HostInfo>,
    pub seam_label: Option<String>,
    pub seam_length: f64,
    pub rate: Option<RateEntry>,
    pub weld: Option<WeldCostCalc>,
    pub line: LineTotal,
}

/// What a recompute produced for one part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Derived {
    Part(PartPricing),
    Service(ServicePricing),
}

impl Derived {
    pub fn line(&self) -> &LineTotal {
        match self {
            Derived::Part(p) => &p.line,
            Derived::Service(s) => &s.line,
        }
    }
}

/// Recompute an ordinary (non-service) part in place.
///
/// Writes the material description, the rolling description when there is
/// one, and the part total for each-priced types.
pub fn recompute_part(part: &mut Part, pitch: &dyn PitchDescriber) -> PartPricing {
    let descriptor = part.part_type.descriptor();
    let spec = part.roll_spec();

    let geometry = if descriptor.rolled {
        let geometry = compute_for_spec(&spec, part.thickness_decimal());
        if geometry.is_none() && spec.roll_value > 0.0 {
            tracing::debug!("{}: no developed length for current inputs", part.number_label());
        }
        geometry
    } else {
        None
    };

    let line = compute_line_total(
        parse_number(&part.material_total),
        parse_number(&part.material_markup_percent),
        parse_number(&part.labor_total),
        part.quantity(),
    );

    part.material_description = material_description(part);
    if descriptor.rolled {
        let rolling = rolling_description(part, pitch);
        if !rolling.is_empty() {
            part.rolling_description = rolling;
        }
    }
    if descriptor.each_priced {
        part.part_total = format_money(line.line_total);
    }

    tracing::debug!("{}: line total {:.2}", part.number_label(), line.line_total);
    PartPricing { geometry, line }
}

/// Recompute a service line against its host part.
///
/// An automatic weld rate is pushed into the part unless the rate was
/// entered by hand.
pub fn recompute_service(service: &mut Part, host: Option<&Part>, settings: &ShopSettings) -> ServicePricing {
    let kind = service.service();
    let info = host.map(extract_host_info);
    if host.is_none() {
        if let Some(id) = service.linked_part() {
            tracing::debug!("{}: host part {} is not linkable", service.number_label(), id);
        }
    }

    let (seam_label, seam_length, seam_option) = match &info {
        Some(info) => {
            let pick = select_seam(&info.seam_options, service.seam_option_index(), &service.custom_seam_length);
            (
                pick.option.map(|o| o.label.clone()),
                pick.length_inches,
                pick.option.cloned(),
            )
        }
        None => (None, 0.0, None),
    };

    if let Some(info) = &info {
        let auto = resolve_weld_rate(&info.grade, &settings.weld_rates);
        let current = service.weld_rate();
        let merged = apply_auto_rate(current, auto);
        if merged != current {
            tracing::debug!(
                "{}: automatic weld rate {} for grade '{}'",
                service.number_label(),
                auto.unwrap_or_default(),
                info.grade
            );
            service.set_weld_rate(merged);
        }
    }
    let rate = service.weld_rate();

    let weld = match (&info, kind) {
        (Some(info), Some(kind)) if kind.has_weld_calc() => compute_weld_cost(
            info.thickness,
            seam_length,
            rate.map(|r| r.value).unwrap_or(0.0),
        ),
        _ => None,
    };

    let labor_each = match &weld {
        Some(calc) => calc.total,
        None => parse_number(&service.labor_total),
    };
    let line = compute_service_total(labor_each, service.quantity());

    service.part_total = format_money(line.line_total);
    service.labor_total = format_money(labor_each);
    service.material_description = service_description(service, host, seam_option.as_ref());
    service.rolling_description = kind.map(|k| k.label().to_string()).unwrap_or_default();

    ServicePricing {
        host: info,
        seam_label,
        seam_length,
        rate,
        weld,
        line,
    }
}

/// Recompute every part of an order.
///
/// Ordinary parts go first so service lines read up-to-date hosts. Results
/// are index-aligned with `order.parts`.
pub fn recompute_order(order: &mut WorkOrder, settings: &ShopSettings, pitch: &dyn PitchDescriber) -> Vec<Derived> {
    let mut derived: Vec<Option<Derived>> = vec![None; order.parts.len()];

    for (i, part) in order.parts.iter_mut().enumerate() {
        if !part.is_service() {
            derived[i] = Some(Derived::Part(recompute_part(part, pitch)));
        }
    }

    for i in 0..order.parts.len() {
        if !order.parts[i].is_service() {
            continue;
        }
        let (updated, pricing) = {
            let registry = PartRegistry::new(&order.parts);
            let mut service = order.parts[i].clone();
            let host = registry.host_for(&service);
            let pricing = recompute_service(&mut service, host, settings);
            (service, pricing)
        };
        order.parts[i] = updated;
        derived[i] = Some(Derived::Service(pricing));
    }

    derived.into_iter().flatten().collect()
}

/// Normalize a part right before it is persisted.
///
/// Quantity is stored as the coerced integer, a blank roll direction is
/// cleared, an unknown material source falls back to customer supplied, and
/// each-priced parts get their total rebuilt from the stored cost fields.
pub fn prepare_for_save(part: &mut Part) {
    let quantity = parse_quantity(&part.quantity);
    part.quantity = quantity.to_string();
    if part.roll_type.trim().is_empty() {
        part.roll_type.clear();
    }
    let source_known = part
        .extra
        .get("materialSource")
        .and_then(Value::as_str)
        .is_some_and(|s| MATERIAL_SOURCES.contains(&s));
    if !source_known {
        part.extra.insert(
            "materialSource".to_string(),
            Value::from(DEFAULT_MATERIAL_SOURCE),
        );
    }
    if part.part_type.is_each_priced() {
        let line = compute_line_total(
            parse_number(&part.material_total),
            parse_number(&part.material_markup_percent),
            parse_number(&part.labor_total),
            quantity,
        );
        part.part_total = format_money(line.line_total);
    }
}
