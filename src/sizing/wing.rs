use tracing::debug;

use super::SizingError;

/// 익면하중과 주익 면적 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingSizing {
    /// 설계 실속속도에서의 동압 [Pa]
    pub q: f64,
    /// 사용한 양력계수
    pub cl: f64,
    /// 익면하중 [N/m²]
    pub wing_loading: f64,
    /// 주익 면적 [m²]
    pub wing_area: f64,
}

/// 동압 q = ½ρv²
pub fn dynamic_pressure(rho: f64, airspeed: f64) -> f64 {
    0.5 * rho * airspeed.powi(2)
}

/// 익면하중 = q × Cl
pub fn wing_loading(q: f64, cl: f64) -> f64 {
    q * cl
}

/// 주익 면적 = 총중량 / 익면하중
pub fn wing_area(gross_takeoff_weight: f64, wing_loading: f64) -> Result<f64, SizingError> {
    if wing_loading == 0.0 {
        return Err(SizingError::DivisionByZero {
            quantity: "wing_loading",
        });
    }
    Ok(gross_takeoff_weight / wing_loading)
}

/// 설계 실속속도와 양력계수(복곡면 캠버 날개 1.4, AC 103-7 Appendix 2)로 주익 면적을 정한다.
pub fn size_wing(
    gross_takeoff_weight: f64,
    stall_speed_max: f64,
    rho: f64,
    cl: f64,
) -> Result<WingSizing, SizingError> {
    SizingError::require_positive("wing_cl", cl)?;
    let q = dynamic_pressure(rho, stall_speed_max);
    let wing_loading = wing_loading(q, cl);
    let wing_area = wing_area(gross_takeoff_weight, wing_loading)?;
    debug!(q, wing_loading, wing_area, "sized wing");
    Ok(WingSizing {
        q,
        cl,
        wing_loading,
        wing_area,
    })
}
