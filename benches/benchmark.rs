// Copyright 2024 Wadmath Developers.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! wadmath benchmark

use bencher::{benchmark_group, benchmark_main, black_box, Bencher};
use wadmath::{
    commified_format, dp_format, int_to_ray, millified_format, rpow, sf_format, str_to_wad,
    wad_to_string, wdiv, wmul, wsqrt, Precision, Rounding, I256,
};

fn wad_parse(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = str_to_wad(black_box("12345678901.23456789"));
    })
}

fn wad_render(bench: &mut Bencher) {
    let val = str_to_wad("12345678901.23456789");
    bench.iter(|| {
        let _n = wad_to_string(black_box(val));
    })
}

fn wad_mul(bench: &mut Bencher) {
    let x = str_to_wad("12345678901.23456789");
    let y = str_to_wad("123456.7890123456789");
    bench.iter(|| {
        let _n = wmul(black_box(x), black_box(y));
    })
}

fn wad_div(bench: &mut Bencher) {
    let x = str_to_wad("12345678901.23456789");
    let y = str_to_wad("123456.7890123456789");
    bench.iter(|| {
        let _n = wdiv(black_box(x), black_box(y));
    })
}

fn ray_pow(bench: &mut Bencher) {
    let x = int_to_ray(I256::new(2));
    bench.iter(|| {
        let _n = rpow(black_box(x), black_box(10));
    })
}

fn wad_sqrt(bench: &mut Bencher) {
    let x = str_to_wad("12345678901.23456789");
    bench.iter(|| {
        let _n = wsqrt(black_box(x)).unwrap();
    })
}

fn format_dp(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = dp_format(black_box("12345678901.23456789"), 2, Rounding::HalfUp);
    })
}

fn format_sf(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = sf_format(black_box("12345678901.23456789"), 6);
    })
}

fn format_commified(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = commified_format(black_box("12345678901.23456789"), Precision::Places(2));
    })
}

fn format_millified(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = millified_format(black_box("12345678901.23456789"), false);
    })
}

benchmark_group!(
    wadmath_benches,
    wad_parse,
    wad_render,
    wad_mul,
    wad_div,
    ray_pow,
    wad_sqrt,
    format_dp,
    format_sf,
    format_commified,
    format_millified,
);

benchmark_main!(wadmath_benches);
