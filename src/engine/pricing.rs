use crate::engine::eta::estimated_time_label;
use crate::geo::{haversine_km, round2, Coordinate};
use crate::models::quote::{FeeBreakdown, FeeQuote};
use crate::models::settings::{
    PricingSettings, PricingStrategy, DEFAULT_BASE_FEE, DEFAULT_PER_KM_FEE,
};
use crate::models::zone::DeliveryZone;

/// Everything the quote needs, resolved up front. The engine reads no shared
/// state; staleness between an admin write and an in-flight quote is
/// acceptable.
#[derive(Debug, Clone)]
pub struct PricingContext {
    /// None when neither a store location nor a restaurant origin is
    /// configured. Quotes then degrade to the flat base fee at distance 0.
    pub origin: Option<Coordinate>,
    pub settings: PricingSettings,
    /// The restaurant's own row, when one exists. `restaurant_custom` prices
    /// strictly from this, never from the global row.
    pub restaurant_settings: Option<PricingSettings>,
    /// Sorted by `min_distance_km`; first matching band wins.
    pub zones: Vec<DeliveryZone>,
}

/// Computes the delivery fee for one order. Pure over its inputs and never
/// panics for finite numbers.
pub fn quote_fee(ctx: &PricingContext, customer: &Coordinate, order_subtotal: f64) -> FeeQuote {
    // No configured origin short-circuits past strategy dispatch entirely:
    // the quote is the flat base fee at distance 0, still clamped and still
    // subject to the free-delivery rule. Zone bands that happen to contain 0
    // must not fire here.
    let Some(origin) = &ctx.origin else {
        let base_fee = match ctx.settings.strategy {
            PricingStrategy::RestaurantCustom => ctx
                .restaurant_settings
                .as_ref()
                .map(|own| own.base_fee)
                .unwrap_or(DEFAULT_BASE_FEE),
            _ => ctx.settings.base_fee,
        };
        return finalize(ctx, 0.0, base_fee, 0.0, None, order_subtotal);
    };

    let distance_km = round2(haversine_km(origin, customer));

    let mut zone_label = None;
    let (base_fee, distance_fee) = match ctx.settings.strategy {
        PricingStrategy::Fixed => (ctx.settings.base_fee, 0.0),
        PricingStrategy::PerKm => (
            ctx.settings.base_fee,
            distance_km * ctx.settings.per_km_fee,
        ),
        PricingStrategy::ZoneBased => match ctx.zones.iter().find(|z| z.contains(distance_km)) {
            Some(zone) => {
                if !zone.estimated_time_label.is_empty() {
                    zone_label = Some(zone.estimated_time_label.clone());
                }
                (zone.flat_fee, 0.0)
            }
            None => (ctx.settings.base_fee, distance_km * DEFAULT_PER_KM_FEE),
        },
        PricingStrategy::RestaurantCustom => {
            let own = ctx
                .restaurant_settings
                .clone()
                .unwrap_or_else(PricingSettings::defaults);
            (own.base_fee, distance_km * own.per_km_fee)
        }
    };

    finalize(ctx, distance_km, base_fee, distance_fee, zone_label, order_subtotal)
}

/// Clamping, the free-delivery override, and quote assembly, shared by the
/// short-circuit and full paths.
fn finalize(
    ctx: &PricingContext,
    distance_km: f64,
    base_fee: f64,
    distance_fee: f64,
    zone_label: Option<String>,
    order_subtotal: f64,
) -> FeeQuote {
    let total_before_clamp = base_fee + distance_fee;
    let clamped = total_before_clamp.clamp(ctx.settings.min_fee, ctx.settings.max_fee);
    let fee = round2(clamped);

    let threshold = ctx.settings.free_delivery_threshold;
    let (fee, is_free_delivery, free_delivery_reason) =
        if threshold > 0.0 && order_subtotal >= threshold {
            (
                0.0,
                true,
                Some(format!(
                    "order subtotal {order_subtotal:.2} meets the free delivery threshold of {threshold:.2}"
                )),
            )
        } else {
            (fee, false, None)
        };

    FeeQuote {
        fee,
        distance_km,
        estimated_time_label: zone_label.unwrap_or_else(|| estimated_time_label(distance_km)),
        breakdown: FeeBreakdown {
            base_fee: round2(base_fee),
            distance_fee: round2(distance_fee),
            total_before_clamp: round2(total_before_clamp),
        },
        is_free_delivery,
        free_delivery_reason,
    }
}
