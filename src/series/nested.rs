//! Every coefficient row written in factored (nested) form, evaluated term by
//! term. The flat Horner tables must reproduce these bit for bit, so a single
//! mistyped constant in `tables.rs` fails here.

use super::*;

const EPS_SAMPLES: [f64; 3] = [0.003_4, -0.012_3, 0.071];
const N_SAMPLES: [f64; 3] = [0.001_679_220_386_383_705, -0.017, 0.093];

fn nested_a1(order: usize, eps: f64) -> f64 {
    let eps2 = eps * eps;
    let t = match order / 2 {
        0 => 0.0,
        1 => eps2 / 4.0,
        2 => eps2 * (eps2 + 16.0) / 64.0,
        3 => eps2 * (eps2 * (eps2 + 4.0) + 64.0) / 256.0,
        4 => eps2 * (eps2 * (eps2 * (25.0 * eps2 + 64.0) + 256.0) + 4096.0) / 16384.0,
        _ => unreachable!(),
    };
    (t + eps) / (1.0 - eps)
}

fn nested_a2(order: usize, eps: f64) -> f64 {
    let eps2 = eps * eps;
    let t = match order / 2 {
        0 => 0.0,
        1 => -3.0 * eps2 / 4.0,
        2 => (-7.0 * eps2 - 48.0) * eps2 / 64.0,
        3 => eps2 * ((-11.0 * eps2 - 28.0) * eps2 - 192.0) / 256.0,
        _ => eps2 * (eps2 * ((-375.0 * eps2 - 704.0) * eps2 - 1792.0) - 12288.0) / 16384.0,
    };
    (t - eps) / (1.0 + eps)
}

fn nested_a3(order: usize, n: f64) -> Vec<f64> {
    let mut c = vec![0.0; order];
    match order {
        0 => {}
        1 => {
            c[0] = 1.0;
        }
        2 => {
            c[0] = 1.0;
            c[1] = -1.0 / 2.0;
        }
        3 => {
            c[0] = 1.0;
            c[1] = (n - 1.0) / 2.0;
            c[2] = -1.0 / 4.0;
        }
        4 => {
            c[0] = 1.0;
            c[1] = (n - 1.0) / 2.0;
            c[2] = (-n - 2.0) / 8.0;
            c[3] = -1.0 / 16.0;
        }
        5 => {
            c[0] = 1.0;
            c[1] = (n - 1.0) / 2.0;
            c[2] = (n * (3.0 * n - 1.0) - 2.0) / 8.0;
            c[3] = (-3.0 * n - 1.0) / 16.0;
            c[4] = -3.0 / 64.0;
        }
        6 => {
            c[0] = 1.0;
            c[1] = (n - 1.0) / 2.0;
            c[2] = (n * (3.0 * n - 1.0) - 2.0) / 8.0;
            c[3] = ((-n - 3.0) * n - 1.0) / 16.0;
            c[4] = (-2.0 * n - 3.0) / 64.0;
            c[5] = -3.0 / 128.0;
        }
        7 => {
            c[0] = 1.0;
            c[1] = (n - 1.0) / 2.0;
            c[2] = (n * (3.0 * n - 1.0) - 2.0) / 8.0;
            c[3] = (n * (n * (5.0 * n - 1.0) - 3.0) - 1.0) / 16.0;
            c[4] = ((-10.0 * n - 2.0) * n - 3.0) / 64.0;
            c[5] = (-5.0 * n - 3.0) / 128.0;
            c[6] = -5.0 / 256.0;
        }
        _ => {
            c[0] = 1.0;
            c[1] = (n - 1.0) / 2.0;
            c[2] = (n * (3.0 * n - 1.0) - 2.0) / 8.0;
            c[3] = (n * (n * (5.0 * n - 1.0) - 3.0) - 1.0) / 16.0;
            c[4] = (n * ((-5.0 * n - 20.0) * n - 4.0) - 6.0) / 128.0;
            c[5] = ((-5.0 * n - 10.0) * n - 6.0) / 256.0;
            c[6] = (-15.0 * n - 20.0) / 1024.0;
            c[7] = -25.0 / 2048.0;
        }
    }
    c
}

fn nested_c1(order: usize, eps: f64) -> Vec<f64> {
    let eps2 = eps * eps;
    let mut d = eps;
    let mut c = vec![0.0; order + 1];
    match order {
        0 => {}
        1 => {
            c[1] = -d / 2.0;
        }
        2 => {
            c[1] = -d / 2.0;
            d *= eps;
            c[2] = -d / 16.0;
        }
        3 => {
            c[1] = d * (3.0 * eps2 - 8.0) / 16.0;
            d *= eps;
            c[2] = -d / 16.0;
            d *= eps;
            c[3] = -d / 48.0;
        }
        4 => {
            c[1] = d * (3.0 * eps2 - 8.0) / 16.0;
            d *= eps;
            c[2] = d * (eps2 - 2.0) / 32.0;
            d *= eps;
            c[3] = -d / 48.0;
            d *= eps;
            c[4] = -5.0 * d / 512.0;
        }
        5 => {
            c[1] = d * ((6.0 - eps2) * eps2 - 16.0) / 32.0;
            d *= eps;
            c[2] = d * (eps2 - 2.0) / 32.0;
            d *= eps;
            c[3] = d * (9.0 * eps2 - 16.0) / 768.0;
            d *= eps;
            c[4] = -5.0 * d / 512.0;
            d *= eps;
            c[5] = -7.0 * d / 1280.0;
        }
        6 => {
            c[1] = d * ((6.0 - eps2) * eps2 - 16.0) / 32.0;
            d *= eps;
            c[2] = d * ((64.0 - 9.0 * eps2) * eps2 - 128.0) / 2048.0;
            d *= eps;
            c[3] = d * (9.0 * eps2 - 16.0) / 768.0;
            d *= eps;
            c[4] = d * (3.0 * eps2 - 5.0) / 512.0;
            d *= eps;
            c[5] = -7.0 * d / 1280.0;
            d *= eps;
            c[6] = -7.0 * d / 2048.0;
        }
        7 => {
            c[1] = d * (eps2 * (eps2 * (19.0 * eps2 - 64.0) + 384.0) - 1024.0) / 2048.0;
            d *= eps;
            c[2] = d * ((64.0 - 9.0 * eps2) * eps2 - 128.0) / 2048.0;
            d *= eps;
            c[3] = d * ((72.0 - 9.0 * eps2) * eps2 - 128.0) / 6144.0;
            d *= eps;
            c[4] = d * (3.0 * eps2 - 5.0) / 512.0;
            d *= eps;
            c[5] = d * (35.0 * eps2 - 56.0) / 10240.0;
            d *= eps;
            c[6] = -7.0 * d / 2048.0;
            d *= eps;
            c[7] = -33.0 * d / 14336.0;
        }
        _ => {
            c[1] = d * (eps2 * (eps2 * (19.0 * eps2 - 64.0) + 384.0) - 1024.0) / 2048.0;
            d *= eps;
            c[2] = d * (eps2 * (eps2 * (7.0 * eps2 - 18.0) + 128.0) - 256.0) / 4096.0;
            d *= eps;
            c[3] = d * ((72.0 - 9.0 * eps2) * eps2 - 128.0) / 6144.0;
            d *= eps;
            c[4] = d * ((96.0 - 11.0 * eps2) * eps2 - 160.0) / 16384.0;
            d *= eps;
            c[5] = d * (35.0 * eps2 - 56.0) / 10240.0;
            d *= eps;
            c[6] = d * (9.0 * eps2 - 14.0) / 4096.0;
            d *= eps;
            c[7] = -33.0 * d / 14336.0;
            d *= eps;
            c[8] = -429.0 * d / 262144.0;
        }
    }
    c
}

fn nested_c1p(order: usize, eps: f64) -> Vec<f64> {
    let eps2 = eps * eps;
    let mut d = eps;
    let mut c = vec![0.0; order + 1];
    match order {
        0 => {}
        1 => {
            c[1] = d / 2.0;
        }
        2 => {
            c[1] = d / 2.0;
            d *= eps;
            c[2] = 5.0 * d / 16.0;
        }
        3 => {
            c[1] = d * (16.0 - 9.0 * eps2) / 32.0;
            d *= eps;
            c[2] = 5.0 * d / 16.0;
            d *= eps;
            c[3] = 29.0 * d / 96.0;
        }
        4 => {
            c[1] = d * (16.0 - 9.0 * eps2) / 32.0;
            d *= eps;
            c[2] = d * (30.0 - 37.0 * eps2) / 96.0;
            d *= eps;
            c[3] = 29.0 * d / 96.0;
            d *= eps;
            c[4] = 539.0 * d / 1536.0;
        }
        5 => {
            c[1] = d * (eps2 * (205.0 * eps2 - 432.0) + 768.0) / 1536.0;
            d *= eps;
            c[2] = d * (30.0 - 37.0 * eps2) / 96.0;
            d *= eps;
            c[3] = d * (116.0 - 225.0 * eps2) / 384.0;
            d *= eps;
            c[4] = 539.0 * d / 1536.0;
            d *= eps;
            c[5] = 3467.0 * d / 7680.0;
        }
        6 => {
            c[1] = d * (eps2 * (205.0 * eps2 - 432.0) + 768.0) / 1536.0;
            d *= eps;
            c[2] = d * (eps2 * (4005.0 * eps2 - 4736.0) + 3840.0) / 12288.0;
            d *= eps;
            c[3] = d * (116.0 - 225.0 * eps2) / 384.0;
            d *= eps;
            c[4] = d * (2695.0 - 7173.0 * eps2) / 7680.0;
            d *= eps;
            c[5] = 3467.0 * d / 7680.0;
            d *= eps;
            c[6] = 38081.0 * d / 61440.0;
        }
        7 => {
            c[1] = d * (eps2 * ((9840.0 - 4879.0 * eps2) * eps2 - 20736.0) + 36864.0) / 73728.0;
            d *= eps;
            c[2] = d * (eps2 * (4005.0 * eps2 - 4736.0) + 3840.0) / 12288.0;
            d *= eps;
            c[3] = d * (eps2 * (8703.0 * eps2 - 7200.0) + 3712.0) / 12288.0;
            d *= eps;
            c[4] = d * (2695.0 - 7173.0 * eps2) / 7680.0;
            d *= eps;
            c[5] = d * (41604.0 - 141115.0 * eps2) / 92160.0;
            d *= eps;
            c[6] = 38081.0 * d / 61440.0;
            d *= eps;
            c[7] = 459485.0 * d / 516096.0;
        }
        _ => {
            c[1] = d * (eps2 * ((9840.0 - 4879.0 * eps2) * eps2 - 20736.0) + 36864.0) / 73728.0;
            d *= eps;
            c[2] = d * (eps2 * ((120150.0 - 86171.0 * eps2) * eps2 - 142080.0) + 115200.0) / 368640.0;
            d *= eps;
            c[3] = d * (eps2 * (8703.0 * eps2 - 7200.0) + 3712.0) / 12288.0;
            d *= eps;
            c[4] = d * (eps2 * (1082857.0 * eps2 - 688608.0) + 258720.0) / 737280.0;
            d *= eps;
            c[5] = d * (41604.0 - 141115.0 * eps2) / 92160.0;
            d *= eps;
            c[6] = d * (533134.0 - 2200311.0 * eps2) / 860160.0;
            d *= eps;
            c[7] = 459485.0 * d / 516096.0;
            d *= eps;
            c[8] = 109167851.0 * d / 82575360.0;
        }
    }
    c
}

fn nested_c2(order: usize, eps: f64) -> Vec<f64> {
    let eps2 = eps * eps;
    let mut d = eps;
    let mut c = vec![0.0; order + 1];
    match order {
        0 => {}
        1 => {
            c[1] = d / 2.0;
        }
        2 => {
            c[1] = d / 2.0;
            d *= eps;
            c[2] = 3.0 * d / 16.0;
        }
        3 => {
            c[1] = d * (eps2 + 8.0) / 16.0;
            d *= eps;
            c[2] = 3.0 * d / 16.0;
            d *= eps;
            c[3] = 5.0 * d / 48.0;
        }
        4 => {
            c[1] = d * (eps2 + 8.0) / 16.0;
            d *= eps;
            c[2] = d * (eps2 + 6.0) / 32.0;
            d *= eps;
            c[3] = 5.0 * d / 48.0;
            d *= eps;
            c[4] = 35.0 * d / 512.0;
        }
        5 => {
            c[1] = d * (eps2 * (eps2 + 2.0) + 16.0) / 32.0;
            d *= eps;
            c[2] = d * (eps2 + 6.0) / 32.0;
            d *= eps;
            c[3] = d * (15.0 * eps2 + 80.0) / 768.0;
            d *= eps;
            c[4] = 35.0 * d / 512.0;
            d *= eps;
            c[5] = 63.0 * d / 1280.0;
        }
        6 => {
            c[1] = d * (eps2 * (eps2 + 2.0) + 16.0) / 32.0;
            d *= eps;
            c[2] = d * (eps2 * (35.0 * eps2 + 64.0) + 384.0) / 2048.0;
            d *= eps;
            c[3] = d * (15.0 * eps2 + 80.0) / 768.0;
            d *= eps;
            c[4] = d * (7.0 * eps2 + 35.0) / 512.0;
            d *= eps;
            c[5] = 63.0 * d / 1280.0;
            d *= eps;
            c[6] = 77.0 * d / 2048.0;
        }
        7 => {
            c[1] = d * (eps2 * (eps2 * (41.0 * eps2 + 64.0) + 128.0) + 1024.0) / 2048.0;
            d *= eps;
            c[2] = d * (eps2 * (35.0 * eps2 + 64.0) + 384.0) / 2048.0;
            d *= eps;
            c[3] = d * (eps2 * (69.0 * eps2 + 120.0) + 640.0) / 6144.0;
            d *= eps;
            c[4] = d * (7.0 * eps2 + 35.0) / 512.0;
            d *= eps;
            c[5] = d * (105.0 * eps2 + 504.0) / 10240.0;
            d *= eps;
            c[6] = 77.0 * d / 2048.0;
            d *= eps;
            c[7] = 429.0 * d / 14336.0;
        }
        _ => {
            c[1] = d * (eps2 * (eps2 * (41.0 * eps2 + 64.0) + 128.0) + 1024.0) / 2048.0;
            d *= eps;
            c[2] = d * (eps2 * (eps2 * (47.0 * eps2 + 70.0) + 128.0) + 768.0) / 4096.0;
            d *= eps;
            c[3] = d * (eps2 * (69.0 * eps2 + 120.0) + 640.0) / 6144.0;
            d *= eps;
            c[4] = d * (eps2 * (133.0 * eps2 + 224.0) + 1120.0) / 16384.0;
            d *= eps;
            c[5] = d * (105.0 * eps2 + 504.0) / 10240.0;
            d *= eps;
            c[6] = d * (33.0 * eps2 + 154.0) / 4096.0;
            d *= eps;
            c[7] = 429.0 * d / 14336.0;
            d *= eps;
            c[8] = 6435.0 * d / 262144.0;
        }
    }
    c
}

fn nested_c3x(order: usize, n: f64) -> Vec<f64> {
    let n2 = n * n;
    let mut c = vec![0.0; order * order.saturating_sub(1) / 2];
    match order {
        0 | 1 => {}
        2 => {
            c[0] = (1.0 - n) / 4.0;
        }
        3 => {
            c[0] = (1.0 - n) / 4.0;
            c[1] = (1.0 - n2) / 8.0;
            c[2] = ((n - 3.0) * n + 2.0) / 32.0;
        }
        4 => {
            c[0] = (1.0 - n) / 4.0;
            c[1] = (1.0 - n2) / 8.0;
            c[2] = (n * ((-5.0 * n - 1.0) * n + 3.0) + 3.0) / 64.0;
            c[3] = ((n - 3.0) * n + 2.0) / 32.0;
            c[4] = (n * (n * (2.0 * n - 3.0) - 2.0) + 3.0) / 64.0;
            c[5] = (n * ((5.0 - n) * n - 9.0) + 5.0) / 192.0;
        }
        5 => {
            c[0] = (1.0 - n) / 4.0;
            c[1] = (1.0 - n2) / 8.0;
            c[2] = (n * ((-5.0 * n - 1.0) * n + 3.0) + 3.0) / 64.0;
            c[3] = (n * ((2.0 - 2.0 * n) * n + 2.0) + 5.0) / 128.0;
            c[4] = ((n - 3.0) * n + 2.0) / 32.0;
            c[5] = (n * (n * (2.0 * n - 3.0) - 2.0) + 3.0) / 64.0;
            c[6] = (n * ((-6.0 * n - 9.0) * n + 2.0) + 6.0) / 256.0;
            c[7] = (n * ((5.0 - n) * n - 9.0) + 5.0) / 192.0;
            c[8] = (n * (n * (10.0 * n - 6.0) - 10.0) + 9.0) / 384.0;
            c[9] = (n * ((20.0 - 7.0 * n) * n - 28.0) + 14.0) / 1024.0;
        }
        6 => {
            c[0] = (1.0 - n) / 4.0;
            c[1] = (1.0 - n2) / 8.0;
            c[2] = (n * ((-5.0 * n - 1.0) * n + 3.0) + 3.0) / 64.0;
            c[3] = (n * ((2.0 - 2.0 * n) * n + 2.0) + 5.0) / 128.0;
            c[4] = (n * (3.0 * n + 11.0) + 12.0) / 512.0;
            c[5] = ((n - 3.0) * n + 2.0) / 32.0;
            c[6] = (n * (n * (2.0 * n - 3.0) - 2.0) + 3.0) / 64.0;
            c[7] = (n * ((-6.0 * n - 9.0) * n + 2.0) + 6.0) / 256.0;
            c[8] = ((1.0 - 2.0 * n) * n + 5.0) / 256.0;
            c[9] = (n * ((5.0 - n) * n - 9.0) + 5.0) / 192.0;
            c[10] = (n * (n * (10.0 * n - 6.0) - 10.0) + 9.0) / 384.0;
            c[11] = ((-77.0 * n - 8.0) * n + 42.0) / 3072.0;
            c[12] = (n * ((20.0 - 7.0 * n) * n - 28.0) + 14.0) / 1024.0;
            c[13] = ((-7.0 * n - 40.0) * n + 28.0) / 2048.0;
            c[14] = (n * (75.0 * n - 90.0) + 42.0) / 5120.0;
        }
        7 => {
            c[0] = (1.0 - n) / 4.0;
            c[1] = (1.0 - n2) / 8.0;
            c[2] = (n * ((-5.0 * n - 1.0) * n + 3.0) + 3.0) / 64.0;
            c[3] = (n * ((2.0 - 2.0 * n) * n + 2.0) + 5.0) / 128.0;
            c[4] = (n * (3.0 * n + 11.0) + 12.0) / 512.0;
            c[5] = (10.0 * n + 21.0) / 1024.0;
            c[6] = ((n - 3.0) * n + 2.0) / 32.0;
            c[7] = (n * (n * (2.0 * n - 3.0) - 2.0) + 3.0) / 64.0;
            c[8] = (n * ((-6.0 * n - 9.0) * n + 2.0) + 6.0) / 256.0;
            c[9] = ((1.0 - 2.0 * n) * n + 5.0) / 256.0;
            c[10] = (69.0 * n + 108.0) / 8192.0;
            c[11] = (n * ((5.0 - n) * n - 9.0) + 5.0) / 192.0;
            c[12] = (n * (n * (10.0 * n - 6.0) - 10.0) + 9.0) / 384.0;
            c[13] = ((-77.0 * n - 8.0) * n + 42.0) / 3072.0;
            c[14] = (12.0 - n) / 1024.0;
            c[15] = (n * ((20.0 - 7.0 * n) * n - 28.0) + 14.0) / 1024.0;
            c[16] = ((-7.0 * n - 40.0) * n + 28.0) / 2048.0;
            c[17] = (72.0 - 43.0 * n) / 8192.0;
            c[18] = (n * (75.0 * n - 90.0) + 42.0) / 5120.0;
            c[19] = (9.0 - 15.0 * n) / 1024.0;
            c[20] = (44.0 - 99.0 * n) / 8192.0;
        }
        _ => {
            c[0] = (1.0 - n) / 4.0;
            c[1] = (1.0 - n2) / 8.0;
            c[2] = (n * ((-5.0 * n - 1.0) * n + 3.0) + 3.0) / 64.0;
            c[3] = (n * ((2.0 - 2.0 * n) * n + 2.0) + 5.0) / 128.0;
            c[4] = (n * (3.0 * n + 11.0) + 12.0) / 512.0;
            c[5] = (10.0 * n + 21.0) / 1024.0;
            c[6] = 243.0 / 16384.0;
            c[7] = ((n - 3.0) * n + 2.0) / 32.0;
            c[8] = (n * (n * (2.0 * n - 3.0) - 2.0) + 3.0) / 64.0;
            c[9] = (n * ((-6.0 * n - 9.0) * n + 2.0) + 6.0) / 256.0;
            c[10] = ((1.0 - 2.0 * n) * n + 5.0) / 256.0;
            c[11] = (69.0 * n + 108.0) / 8192.0;
            c[12] = 187.0 / 16384.0;
            c[13] = (n * ((5.0 - n) * n - 9.0) + 5.0) / 192.0;
            c[14] = (n * (n * (10.0 * n - 6.0) - 10.0) + 9.0) / 384.0;
            c[15] = ((-77.0 * n - 8.0) * n + 42.0) / 3072.0;
            c[16] = (12.0 - n) / 1024.0;
            c[17] = 139.0 / 16384.0;
            c[18] = (n * ((20.0 - 7.0 * n) * n - 28.0) + 14.0) / 1024.0;
            c[19] = ((-7.0 * n - 40.0) * n + 28.0) / 2048.0;
            c[20] = (72.0 - 43.0 * n) / 8192.0;
            c[21] = 127.0 / 16384.0;
            c[22] = (n * (75.0 * n - 90.0) + 42.0) / 5120.0;
            c[23] = (9.0 - 15.0 * n) / 1024.0;
            c[24] = 99.0 / 16384.0;
            c[25] = (44.0 - 99.0 * n) / 8192.0;
            c[26] = 99.0 / 16384.0;
            c[27] = 429.0 / 114688.0;
        }
    }
    c
}
#[test]
fn test_a1_matches_nested_form() {
    for order in SeriesOrder::all() {
        for eps in EPS_SAMPLES {
            assert_eq!(evaluate_a1(order, eps), nested_a1(order.get(), eps), "order {order}, eps {eps}");
        }
    }
}

#[test]
fn test_a2_matches_nested_form() {
    for order in SeriesOrder::all() {
        for eps in EPS_SAMPLES {
            assert_eq!(evaluate_a2(order, eps), nested_a2(order.get(), eps), "order {order}, eps {eps}");
        }
    }
}

#[test]
fn test_a3_matches_nested_form() {
    for order in SeriesOrder::all() {
        for n in N_SAMPLES {
            let a3 = evaluate_a3_coeffs(order, n);
            assert_eq!(a3.as_slice(), nested_a3(order.get(), n).as_slice(), "order {order}, n {n}");
        }
    }
}

#[test]
fn test_c1_matches_nested_form() {
    for order in SeriesOrder::all() {
        for eps in EPS_SAMPLES {
            let c1 = evaluate_c1_coeffs(order, eps);
            assert_eq!(c1.as_slice(), nested_c1(order.get(), eps).as_slice(), "order {order}, eps {eps}");
        }
    }
}

#[test]
fn test_c1p_matches_nested_form() {
    for order in SeriesOrder::all() {
        for eps in EPS_SAMPLES {
            let c1p = evaluate_c1p_coeffs(order, eps);
            assert_eq!(c1p.as_slice(), nested_c1p(order.get(), eps).as_slice(), "order {order}, eps {eps}");
        }
    }
}

#[test]
fn test_c2_matches_nested_form() {
    for order in SeriesOrder::all() {
        for eps in EPS_SAMPLES {
            let c2 = evaluate_c2_coeffs(order, eps);
            assert_eq!(c2.as_slice(), nested_c2(order.get(), eps).as_slice(), "order {order}, eps {eps}");
        }
    }
}

#[test]
fn test_c3x_matches_nested_form() {
    for order in SeriesOrder::all() {
        for n in N_SAMPLES {
            let c3x = evaluate_c3x_coeffs(order, n);
            assert_eq!(c3x.as_slice(), nested_c3x(order.get(), n).as_slice(), "order {order}, n {n}");
        }
    }
}
