mod float_utils;
mod vector;
