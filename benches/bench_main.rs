#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;

extern crate chessbits;



mod move_gen_benches;
mod perft_benches;

criterion_main!{
    bit_benches::bit_benches,
    board_benches::board_benches,
    lookup_benches::lookup_benches
}