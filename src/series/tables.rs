//! Coefficient tables for the series families.
//!
//! Each entry is a polynomial with integer coefficients in ascending powers and
//! an integer denominator, reproduced from the Maxima derivation in Karney,
//! "Algorithms for geodesics" (2013). Orders that share a polynomial are still
//! listed separately so each row can be audited against its own case.

use super::poly::{r, Rational};
use super::order::ORDERS;

/// A1 numerator in eps², keyed by `order / 2`.
pub(crate) static A1: [Rational; 5] = [
    r(&[0.0], 1.0),
    r(&[0.0, 1.0], 4.0),
    r(&[0.0, 16.0, 1.0], 64.0),
    r(&[0.0, 64.0, 4.0, 1.0], 256.0),
    r(&[0.0, 4096.0, 256.0, 64.0, 25.0], 16384.0),
];

/// A2 numerator in eps², keyed by `order / 2`.
pub(crate) static A2: [Rational; 5] = [
    r(&[0.0], 1.0),
    r(&[0.0, -3.0], 4.0),
    r(&[0.0, -48.0, -7.0], 64.0),
    r(&[0.0, -192.0, -28.0, -11.0], 256.0),
    r(&[0.0, -12288.0, -1792.0, -704.0, -375.0], 16384.0),
];

/// A3 coefficient of eps^j as a polynomial in n, per order.
pub(crate) static A3: [&[Rational]; ORDERS] = [
    // 0
    &[],
    // 1
    &[
        r(&[1.0], 1.0),
    ],
    // 2
    &[
        r(&[1.0], 1.0),
        r(&[-1.0], 2.0),
    ],
    // 3
    &[
        r(&[1.0], 1.0),
        r(&[-1.0, 1.0], 2.0),
        r(&[-1.0], 4.0),
    ],
    // 4
    &[
        r(&[1.0], 1.0),
        r(&[-1.0, 1.0], 2.0),
        r(&[-2.0, -1.0], 8.0),
        r(&[-1.0], 16.0),
    ],
    // 5
    &[
        r(&[1.0], 1.0),
        r(&[-1.0, 1.0], 2.0),
        r(&[-2.0, -1.0, 3.0], 8.0),
        r(&[-1.0, -3.0], 16.0),
        r(&[-3.0], 64.0),
    ],
    // 6
    &[
        r(&[1.0], 1.0),
        r(&[-1.0, 1.0], 2.0),
        r(&[-2.0, -1.0, 3.0], 8.0),
        r(&[-1.0, -3.0, -1.0], 16.0),
        r(&[-3.0, -2.0], 64.0),
        r(&[-3.0], 128.0),
    ],
    // 7
    &[
        r(&[1.0], 1.0),
        r(&[-1.0, 1.0], 2.0),
        r(&[-2.0, -1.0, 3.0], 8.0),
        r(&[-1.0, -3.0, -1.0, 5.0], 16.0),
        r(&[-3.0, -2.0, -10.0], 64.0),
        r(&[-3.0, -5.0], 128.0),
        r(&[-5.0], 256.0),
    ],
    // 8
    &[
        r(&[1.0], 1.0),
        r(&[-1.0, 1.0], 2.0),
        r(&[-2.0, -1.0, 3.0], 8.0),
        r(&[-1.0, -3.0, -1.0, 5.0], 16.0),
        r(&[-6.0, -4.0, -20.0, -5.0], 128.0),
        r(&[-6.0, -10.0, -5.0], 256.0),
        r(&[-20.0, -15.0], 1024.0),
        r(&[-25.0], 2048.0),
    ],
];

/// C1[l] as `eps^l * P(eps²) / D`, per order, l = 1..=order.
pub(crate) static C1: [&[Rational]; ORDERS] = [
    // 0
    &[],
    // 1
    &[
        r(&[-1.0], 2.0),
    ],
    // 2
    &[
        r(&[-1.0], 2.0),
        r(&[-1.0], 16.0),
    ],
    // 3
    &[
        r(&[-8.0, 3.0], 16.0),
        r(&[-1.0], 16.0),
        r(&[-1.0], 48.0),
    ],
    // 4
    &[
        r(&[-8.0, 3.0], 16.0),
        r(&[-2.0, 1.0], 32.0),
        r(&[-1.0], 48.0),
        r(&[-5.0], 512.0),
    ],
    // 5
    &[
        r(&[-16.0, 6.0, -1.0], 32.0),
        r(&[-2.0, 1.0], 32.0),
        r(&[-16.0, 9.0], 768.0),
        r(&[-5.0], 512.0),
        r(&[-7.0], 1280.0),
    ],
    // 6
    &[
        r(&[-16.0, 6.0, -1.0], 32.0),
        r(&[-128.0, 64.0, -9.0], 2048.0),
        r(&[-16.0, 9.0], 768.0),
        r(&[-5.0, 3.0], 512.0),
        r(&[-7.0], 1280.0),
        r(&[-7.0], 2048.0),
    ],
    // 7
    &[
        r(&[-1024.0, 384.0, -64.0, 19.0], 2048.0),
        r(&[-128.0, 64.0, -9.0], 2048.0),
        r(&[-128.0, 72.0, -9.0], 6144.0),
        r(&[-5.0, 3.0], 512.0),
        r(&[-56.0, 35.0], 10240.0),
        r(&[-7.0], 2048.0),
        r(&[-33.0], 14336.0),
    ],
    // 8
    &[
        r(&[-1024.0, 384.0, -64.0, 19.0], 2048.0),
        r(&[-256.0, 128.0, -18.0, 7.0], 4096.0),
        r(&[-128.0, 72.0, -9.0], 6144.0),
        r(&[-160.0, 96.0, -11.0], 16384.0),
        r(&[-56.0, 35.0], 10240.0),
        r(&[-14.0, 9.0], 4096.0),
        r(&[-33.0], 14336.0),
        r(&[-429.0], 262144.0),
    ],
];

/// C1p[l] as `eps^l * P(eps²) / D`, per order, l = 1..=order.
pub(crate) static C1P: [&[Rational]; ORDERS] = [
    // 0
    &[],
    // 1
    &[
        r(&[1.0], 2.0),
    ],
    // 2
    &[
        r(&[1.0], 2.0),
        r(&[5.0], 16.0),
    ],
    // 3
    &[
        r(&[16.0, -9.0], 32.0),
        r(&[5.0], 16.0),
        r(&[29.0], 96.0),
    ],
    // 4
    &[
        r(&[16.0, -9.0], 32.0),
        r(&[30.0, -37.0], 96.0),
        r(&[29.0], 96.0),
        r(&[539.0], 1536.0),
    ],
    // 5
    &[
        r(&[768.0, -432.0, 205.0], 1536.0),
        r(&[30.0, -37.0], 96.0),
        r(&[116.0, -225.0], 384.0),
        r(&[539.0], 1536.0),
        r(&[3467.0], 7680.0),
    ],
    // 6
    &[
        r(&[768.0, -432.0, 205.0], 1536.0),
        r(&[3840.0, -4736.0, 4005.0], 12288.0),
        r(&[116.0, -225.0], 384.0),
        r(&[2695.0, -7173.0], 7680.0),
        r(&[3467.0], 7680.0),
        r(&[38081.0], 61440.0),
    ],
    // 7
    &[
        r(&[36864.0, -20736.0, 9840.0, -4879.0], 73728.0),
        r(&[3840.0, -4736.0, 4005.0], 12288.0),
        r(&[3712.0, -7200.0, 8703.0], 12288.0),
        r(&[2695.0, -7173.0], 7680.0),
        r(&[41604.0, -141115.0], 92160.0),
        r(&[38081.0], 61440.0),
        r(&[459485.0], 516096.0),
    ],
    // 8
    &[
        r(&[36864.0, -20736.0, 9840.0, -4879.0], 73728.0),
        r(&[115200.0, -142080.0, 120150.0, -86171.0], 368640.0),
        r(&[3712.0, -7200.0, 8703.0], 12288.0),
        r(&[258720.0, -688608.0, 1082857.0], 737280.0),
        r(&[41604.0, -141115.0], 92160.0),
        r(&[533134.0, -2200311.0], 860160.0),
        r(&[459485.0], 516096.0),
        r(&[109167851.0], 82575360.0),
    ],
];

/// C2[l] as `eps^l * P(eps²) / D`, per order, l = 1..=order.
pub(crate) static C2: [&[Rational]; ORDERS] = [
    // 0
    &[],
    // 1
    &[
        r(&[1.0], 2.0),
    ],
    // 2
    &[
        r(&[1.0], 2.0),
        r(&[3.0], 16.0),
    ],
    // 3
    &[
        r(&[8.0, 1.0], 16.0),
        r(&[3.0], 16.0),
        r(&[5.0], 48.0),
    ],
    // 4
    &[
        r(&[8.0, 1.0], 16.0),
        r(&[6.0, 1.0], 32.0),
        r(&[5.0], 48.0),
        r(&[35.0], 512.0),
    ],
    // 5
    &[
        r(&[16.0, 2.0, 1.0], 32.0),
        r(&[6.0, 1.0], 32.0),
        r(&[80.0, 15.0], 768.0),
        r(&[35.0], 512.0),
        r(&[63.0], 1280.0),
    ],
    // 6
    &[
        r(&[16.0, 2.0, 1.0], 32.0),
        r(&[384.0, 64.0, 35.0], 2048.0),
        r(&[80.0, 15.0], 768.0),
        r(&[35.0, 7.0], 512.0),
        r(&[63.0], 1280.0),
        r(&[77.0], 2048.0),
    ],
    // 7
    &[
        r(&[1024.0, 128.0, 64.0, 41.0], 2048.0),
        r(&[384.0, 64.0, 35.0], 2048.0),
        r(&[640.0, 120.0, 69.0], 6144.0),
        r(&[35.0, 7.0], 512.0),
        r(&[504.0, 105.0], 10240.0),
        r(&[77.0], 2048.0),
        r(&[429.0], 14336.0),
    ],
    // 8
    &[
        r(&[1024.0, 128.0, 64.0, 41.0], 2048.0),
        r(&[768.0, 128.0, 70.0, 47.0], 4096.0),
        r(&[640.0, 120.0, 69.0], 6144.0),
        r(&[1120.0, 224.0, 133.0], 16384.0),
        r(&[504.0, 105.0], 10240.0),
        r(&[154.0, 33.0], 4096.0),
        r(&[429.0], 14336.0),
        r(&[6435.0], 262144.0),
    ],
];

/// C3x triangular table as polynomials in n, per order.
///
/// Harmonic l owns `order - l` consecutive entries, lowest power of eps first.
pub(crate) static C3X: [&[Rational]; ORDERS] = [
    // 0
    &[],
    // 1
    &[],
    // 2
    &[
        r(&[1.0, -1.0], 4.0),
    ],
    // 3
    &[
        r(&[1.0, -1.0], 4.0),
        r(&[1.0, 0.0, -1.0], 8.0),
        r(&[2.0, -3.0, 1.0], 32.0),
    ],
    // 4
    &[
        r(&[1.0, -1.0], 4.0),
        r(&[1.0, 0.0, -1.0], 8.0),
        r(&[3.0, 3.0, -1.0, -5.0], 64.0),
        r(&[2.0, -3.0, 1.0], 32.0),
        r(&[3.0, -2.0, -3.0, 2.0], 64.0),
        r(&[5.0, -9.0, 5.0, -1.0], 192.0),
    ],
    // 5
    &[
        r(&[1.0, -1.0], 4.0),
        r(&[1.0, 0.0, -1.0], 8.0),
        r(&[3.0, 3.0, -1.0, -5.0], 64.0),
        r(&[5.0, 2.0, 2.0, -2.0], 128.0),
        r(&[2.0, -3.0, 1.0], 32.0),
        r(&[3.0, -2.0, -3.0, 2.0], 64.0),
        r(&[6.0, 2.0, -9.0, -6.0], 256.0),
        r(&[5.0, -9.0, 5.0, -1.0], 192.0),
        r(&[9.0, -10.0, -6.0, 10.0], 384.0),
        r(&[14.0, -28.0, 20.0, -7.0], 1024.0),
    ],
    // 6
    &[
        r(&[1.0, -1.0], 4.0),
        r(&[1.0, 0.0, -1.0], 8.0),
        r(&[3.0, 3.0, -1.0, -5.0], 64.0),
        r(&[5.0, 2.0, 2.0, -2.0], 128.0),
        r(&[12.0, 11.0, 3.0], 512.0),
        r(&[2.0, -3.0, 1.0], 32.0),
        r(&[3.0, -2.0, -3.0, 2.0], 64.0),
        r(&[6.0, 2.0, -9.0, -6.0], 256.0),
        r(&[5.0, 1.0, -2.0], 256.0),
        r(&[5.0, -9.0, 5.0, -1.0], 192.0),
        r(&[9.0, -10.0, -6.0, 10.0], 384.0),
        r(&[42.0, -8.0, -77.0], 3072.0),
        r(&[14.0, -28.0, 20.0, -7.0], 1024.0),
        r(&[28.0, -40.0, -7.0], 2048.0),
        r(&[42.0, -90.0, 75.0], 5120.0),
    ],
    // 7
    &[
        r(&[1.0, -1.0], 4.0),
        r(&[1.0, 0.0, -1.0], 8.0),
        r(&[3.0, 3.0, -1.0, -5.0], 64.0),
        r(&[5.0, 2.0, 2.0, -2.0], 128.0),
        r(&[12.0, 11.0, 3.0], 512.0),
        r(&[21.0, 10.0], 1024.0),
        r(&[2.0, -3.0, 1.0], 32.0),
        r(&[3.0, -2.0, -3.0, 2.0], 64.0),
        r(&[6.0, 2.0, -9.0, -6.0], 256.0),
        r(&[5.0, 1.0, -2.0], 256.0),
        r(&[108.0, 69.0], 8192.0),
        r(&[5.0, -9.0, 5.0, -1.0], 192.0),
        r(&[9.0, -10.0, -6.0, 10.0], 384.0),
        r(&[42.0, -8.0, -77.0], 3072.0),
        r(&[12.0, -1.0], 1024.0),
        r(&[14.0, -28.0, 20.0, -7.0], 1024.0),
        r(&[28.0, -40.0, -7.0], 2048.0),
        r(&[72.0, -43.0], 8192.0),
        r(&[42.0, -90.0, 75.0], 5120.0),
        r(&[9.0, -15.0], 1024.0),
        r(&[44.0, -99.0], 8192.0),
    ],
    // 8
    &[
        r(&[1.0, -1.0], 4.0),
        r(&[1.0, 0.0, -1.0], 8.0),
        r(&[3.0, 3.0, -1.0, -5.0], 64.0),
        r(&[5.0, 2.0, 2.0, -2.0], 128.0),
        r(&[12.0, 11.0, 3.0], 512.0),
        r(&[21.0, 10.0], 1024.0),
        r(&[243.0], 16384.0),
        r(&[2.0, -3.0, 1.0], 32.0),
        r(&[3.0, -2.0, -3.0, 2.0], 64.0),
        r(&[6.0, 2.0, -9.0, -6.0], 256.0),
        r(&[5.0, 1.0, -2.0], 256.0),
        r(&[108.0, 69.0], 8192.0),
        r(&[187.0], 16384.0),
        r(&[5.0, -9.0, 5.0, -1.0], 192.0),
        r(&[9.0, -10.0, -6.0, 10.0], 384.0),
        r(&[42.0, -8.0, -77.0], 3072.0),
        r(&[12.0, -1.0], 1024.0),
        r(&[139.0], 16384.0),
        r(&[14.0, -28.0, 20.0, -7.0], 1024.0),
        r(&[28.0, -40.0, -7.0], 2048.0),
        r(&[72.0, -43.0], 8192.0),
        r(&[127.0], 16384.0),
        r(&[42.0, -90.0, 75.0], 5120.0),
        r(&[9.0, -15.0], 1024.0),
        r(&[99.0], 16384.0),
        r(&[44.0, -99.0], 8192.0),
        r(&[99.0], 16384.0),
        r(&[429.0], 114688.0),
    ],
];
