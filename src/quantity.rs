use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    Mass,
    Force,
    Length,
    Area,
    Volume,
    Velocity,
    Density,
    Power,
    Pressure,
}

impl QuantityKind {
    /// 단위 문자열로 종류를 추정할 때 검사하는 순서.
    pub const ALL: [QuantityKind; 9] = [
        QuantityKind::Mass,
        QuantityKind::Force,
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Velocity,
        QuantityKind::Density,
        QuantityKind::Power,
        QuantityKind::Pressure,
    ];

    /// 물리량 종류의 차원(M, L, T 지수).
    pub fn dimension(self) -> Dimension {
        match self {
            QuantityKind::Mass => Dimension::MASS,
            QuantityKind::Force => Dimension::FORCE,
            QuantityKind::Length => Dimension::LENGTH,
            QuantityKind::Area => Dimension::new(0, 2, 0),
            QuantityKind::Volume => Dimension::new(0, 3, 0),
            QuantityKind::Velocity => Dimension::VELOCITY,
            QuantityKind::Density => Dimension::new(1, -3, 0),
            QuantityKind::Power => Dimension::new(1, 2, -3),
            QuantityKind::Pressure => Dimension::new(1, -1, -2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Mass => "mass",
            QuantityKind::Force => "force",
            QuantityKind::Length => "length",
            QuantityKind::Area => "area",
            QuantityKind::Volume => "volume",
            QuantityKind::Velocity => "velocity",
            QuantityKind::Density => "density",
            QuantityKind::Power => "power",
            QuantityKind::Pressure => "pressure",
        }
    }
}

/// 내부 기준 단위로 환산된 값을 담는 컨테이너.
///
/// `value_base`는 kind별 기준 단위(kg, N, m, m², m³, m/s, kg/m³, W, Pa)로 저장한다.
#[derive(Debug, Clone, Copy)]
pub struct QuantityValue {
    pub kind: QuantityKind,
    pub value_base: f64,
}

impl QuantityValue {
    pub fn to_quantity(self) -> Quantity {
        Quantity::new(self.value_base, self.kind.dimension())
    }
}

/// 질량(M), 길이(L), 시간(T)의 지수로 표현한 차원 벡터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub mass: i8,
    pub length: i8,
    pub time: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0);
    pub const MASS: Dimension = Dimension::new(1, 0, 0);
    pub const LENGTH: Dimension = Dimension::new(0, 1, 0);
    pub const VELOCITY: Dimension = Dimension::new(0, 1, -1);
    pub const ACCELERATION: Dimension = Dimension::new(0, 1, -2);
    pub const FORCE: Dimension = Dimension::new(1, 1, -2);

    pub const fn new(mass: i8, length: i8, time: i8) -> Self {
        Self { mass, length, time }
    }

    fn combine(self, other: Dimension, sign: i8) -> Dimension {
        Dimension::new(
            self.mass + sign * other.mass,
            self.length + sign * other.length,
            self.time + sign * other.time,
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Dimension::DIMENSIONLESS {
            return write!(f, "1");
        }
        let mut parts = Vec::new();
        for (symbol, exp) in [("M", self.mass), ("L", self.length), ("T", self.time)] {
            match exp {
                0 => {}
                1 => parts.push(symbol.to_string()),
                e => parts.push(format!("{symbol}^{e}")),
            }
        }
        write!(f, "{}", parts.join("·"))
    }
}

/// 크기와 차원을 함께 들고 다니는 가벼운 물리량 값.
///
/// 곱셈/나눗셈은 차원을 합성하고, 덧셈은 [`Quantity::checked_add`]로만 허용한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub dim: Dimension,
}

/// 차원이 다른 두 값을 더하려 할 때의 불일치 정보.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("차원 불일치: {lhs} + {rhs}")]
pub struct DimensionMismatch {
    pub lhs: Dimension,
    pub rhs: Dimension,
}

impl Quantity {
    pub const fn new(value: f64, dim: Dimension) -> Self {
        Self { value, dim }
    }

    pub const fn mass(kg: f64) -> Self {
        Self::new(kg, Dimension::MASS)
    }

    pub const fn force(newton: f64) -> Self {
        Self::new(newton, Dimension::FORCE)
    }

    /// 같은 차원일 때만 더한다.
    pub fn checked_add(self, rhs: Quantity) -> Result<Quantity, DimensionMismatch> {
        if self.dim != rhs.dim {
            return Err(DimensionMismatch {
                lhs: self.dim,
                rhs: rhs.dim,
            });
        }
        Ok(Quantity::new(self.value + rhs.value, self.dim))
    }

    /// 차원을 무시하고 크기만 더한다. 불일치가 있으면 함께 돌려준다.
    pub fn literal_add(self, rhs: Quantity) -> (Quantity, Option<DimensionMismatch>) {
        match self.checked_add(rhs) {
            Ok(sum) => (sum, None),
            Err(mismatch) => (Quantity::new(self.value + rhs.value, self.dim), Some(mismatch)),
        }
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.value * rhs.value, self.dim.combine(rhs.dim, 1))
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.dim)
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.value / rhs.value, self.dim.combine(rhs.dim, -1))
    }
}
