//! Randomized checks of the kd-tree against an exhaustive scan.
