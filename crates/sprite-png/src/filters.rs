/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scanline filters
//!
//! Eight bit images are reconstructed a whole pixel at a time, the lane-wise
//! arithmetic keeps each sample independent of its neighbours in the word.
//! Sub-byte depths are reconstructed a byte at a time instead.
use crate::enums::FilterMethod;
use crate::pixel::{add, average, paeth, paeth_predictor, sub};

/// Already reconstructed pixels surrounding the current one,
/// zero where the neighbour lies outside the pass
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Neighbours {
    pub left:       u32,
    pub above:      u32,
    pub upper_left: u32
}

pub(crate) type Reconstructor = fn(u32, Neighbours) -> u32;

fn handle_none(value: u32, _: Neighbours) -> u32 {
    value
}

fn handle_sub(value: u32, n: Neighbours) -> u32 {
    add(value, n.left)
}

fn handle_up(value: u32, n: Neighbours) -> u32 {
    add(value, n.above)
}

fn handle_avg(value: u32, n: Neighbours) -> u32 {
    add(value, average(n.left, n.above))
}

fn handle_paeth(value: u32, n: Neighbours) -> u32 {
    add(value, paeth(n.left, n.above, n.upper_left))
}

/// Pixel reconstruction, indexed by the filter type byte
pub(crate) const RECONSTRUCTORS: [Reconstructor; 5] =
    [handle_none, handle_sub, handle_up, handle_avg, handle_paeth];

/// Undo a filter on one row of bytes in place, with one byte per pixel.
///
/// `prev_row` is the previous reconstructed row of the same pass, all
/// zeroes for the first row, and must be as long as `current`.
pub(crate) fn defilter_row(filter: FilterMethod, prev_row: &[u8], current: &mut [u8]) {
    debug_assert_eq!(prev_row.len(), current.len());

    match filter {
        FilterMethod::None => (),
        FilterMethod::Sub => {
            for i in 1..current.len() {
                current[i] = current[i].wrapping_add(current[i - 1]);
            }
        }
        FilterMethod::Up => {
            for (cur, up) in current.iter_mut().zip(prev_row) {
                *cur = cur.wrapping_add(*up);
            }
        }
        FilterMethod::Average => {
            let mut left = 0_u16;

            for (cur, up) in current.iter_mut().zip(prev_row) {
                *cur = cur.wrapping_add(((left + u16::from(*up)) >> 1) as u8);
                left = u16::from(*cur);
            }
        }
        FilterMethod::Paeth => {
            let (mut left, mut upper_left) = (0, 0);

            for (cur, up) in current.iter_mut().zip(prev_row) {
                *cur = cur.wrapping_add(paeth_predictor(left, *up, upper_left));
                left = *cur;
                upper_left = *up;
            }
        }
    }
}

/// Append one row filtered with the sub filter, filter byte included,
/// each pixel is written as `r, g, b, a`
pub(crate) fn sub_filter_row(row: &[u32], out: &mut Vec<u8>) {
    out.push(FilterMethod::Sub.to_int());

    let mut left = 0;

    for pixel in row {
        out.extend_from_slice(&sub(*pixel, left).to_be_bytes());
        left = *pixel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::pack;

    #[test]
    fn table_follows_filter_codes() {
        let n = Neighbours {
            left:       pack(10, 0, 0, 0),
            above:      pack(20, 0, 0, 0),
            upper_left: pack(15, 0, 0, 0)
        };
        let v = pack(1, 0, 0, 0);

        assert_eq!(RECONSTRUCTORS[0](v, n), pack(1, 0, 0, 0));
        assert_eq!(RECONSTRUCTORS[1](v, n), pack(11, 0, 0, 0));
        assert_eq!(RECONSTRUCTORS[2](v, n), pack(21, 0, 0, 0));
        assert_eq!(RECONSTRUCTORS[3](v, n), pack(16, 0, 0, 0));
        // p = 15, closest is upper left
        assert_eq!(RECONSTRUCTORS[4](v, n), pack(16, 0, 0, 0));
    }

    #[test]
    fn sub_filter_undone_by_sub_reconstruction() {
        let row = [pack(1, 2, 3, 255), pack(0, 200, 3, 255), pack(255, 1, 9, 128)];
        let mut out = vec![];
        sub_filter_row(&row, &mut out);

        assert_eq!(out[0], 1);
        assert_eq!(out.len(), 1 + 4 * row.len());

        let mut left = 0;
        for (bytes, expected) in out[1..].chunks_exact(4).zip(row) {
            let v = u32::from_be_bytes(bytes.try_into().unwrap());
            let n = Neighbours {
                left,
                ..Default::default()
            };
            left = RECONSTRUCTORS[1](v, n);
            assert_eq!(left, expected);
        }
    }

    #[test]
    fn bytewise_sub_and_up() {
        let mut current = [1, 1, 1];
        defilter_row(FilterMethod::Sub, &[0, 0, 0], &mut current);
        assert_eq!(current, [1, 2, 3]);

        let mut current = [1, 1, 255];
        defilter_row(FilterMethod::Up, &[5, 6, 2], &mut current);
        assert_eq!(current, [6, 7, 1]);
    }

    #[test]
    fn bytewise_average_and_paeth() {
        let mut current = [4, 4];
        defilter_row(FilterMethod::Average, &[2, 7], &mut current);
        // 4 + (0+2)/2 = 5, 4 + (5+7)/2 = 10
        assert_eq!(current, [5, 10]);

        let mut current = [1, 1];
        defilter_row(FilterMethod::Paeth, &[0, 0], &mut current);
        // without a row above paeth degrades to sub
        assert_eq!(current, [1, 2]);
    }
}
