//! Constant parameter sets for the kyberscope estimator

#![cfg_attr(not(test), no_std)]

pub mod kyber;
