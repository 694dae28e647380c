//! End-to-end tests of the segmenter.

mod segmenter;
