mod print_lcs_by_granularity;
mod print_lcs_of_random_lines;
