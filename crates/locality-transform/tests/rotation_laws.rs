//! Integration test: rotations of pixel images across representations.
//!
//! The same rotation applied through the plain and blocked tables, with
//! every order each supports, must produce the same image, and quarter
//! turns must compose like angles.

use locality_core::MapOrder;
use locality_grid::{BlockedGrid, Grid, GridMethods, BLOCKED, PLAIN};
use locality_ppm::Rgb;
use locality_test_utils::{
    gradient_image, rows_of, sequential_grid, sequential_grid_with_blocksize, BLOCKSIZES,
};
use locality_transform::{rotate, rotate_into, Rotation};
use proptest::prelude::*;

fn rotated_rows<M: GridMethods<Rgb>>(
    methods: M,
    width: u32,
    height: u32,
    order: MapOrder,
    rotation: Rotation,
) -> Vec<Vec<Rgb>> {
    let mut image = gradient_image(methods, width, height);
    let out = rotate(methods, image.pixels_mut(), order, rotation).unwrap();
    rows_of(&out)
}

#[test]
fn ninety_then_one_eighty_is_two_seventy() {
    let mut image = gradient_image(BLOCKED, 7, 5);
    let order = MapOrder::BlockMajor;
    let mut step = rotate(BLOCKED, image.pixels_mut(), order, Rotation::Ninety).unwrap();
    let two_steps = rotate(BLOCKED, &mut step, order, Rotation::OneEighty).unwrap();
    let direct = rotate(BLOCKED, image.pixels_mut(), order, Rotation::TwoSeventy).unwrap();
    assert_eq!((two_steps.width(), two_steps.height()), (5, 7));
    assert_eq!(rows_of(&two_steps), rows_of(&direct));
}

#[test]
fn large_image_spans_many_blocks() {
    // Rgb is 6 bytes, so the automatic block size is 104.
    let (w, h) = (300, 211);
    let plain = rotated_rows(PLAIN, w, h, MapOrder::RowMajor, Rotation::Ninety);
    let blocked = rotated_rows(BLOCKED, w, h, MapOrder::BlockMajor, Rotation::Ninety);
    assert_eq!(plain.len(), w as usize);
    assert_eq!(plain, blocked);
}

#[test]
fn every_block_size_rotates_like_the_plain_grid() {
    let (w, h) = (10, 9);
    for bs in BLOCKSIZES {
        for r in Rotation::ALL {
            let mut plain = sequential_grid(PLAIN, w, h);
            let expected = rotate(PLAIN, &mut plain, MapOrder::RowMajor, r).unwrap();

            let (tw, th) = r.output_dims(w, h);
            let mut source = sequential_grid_with_blocksize(BLOCKED, w, h, bs);
            let mut target: BlockedGrid<u32> = BLOCKED.create_with_blocksize(tw, th, bs).unwrap();
            rotate_into(&mut source, &mut target, MapOrder::BlockMajor, r).unwrap();
            assert_eq!(target.blocksize(), bs);
            assert_eq!(rows_of(&target), rows_of(&expected), "blocksize {bs}, rotation {r}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn all_orders_agree(w in 1u32..70, h in 1u32..70, a in 0usize..4) {
        let r = Rotation::ALL[a];
        let reference = rotated_rows(PLAIN, w, h, MapOrder::RowMajor, r);
        prop_assert_eq!(&rotated_rows(PLAIN, w, h, MapOrder::ColumnMajor, r), &reference);
        prop_assert_eq!(&rotated_rows(BLOCKED, w, h, MapOrder::BlockMajor, r), &reference);
    }
}
