//! Only hosts the benchmarks under `benches/`
