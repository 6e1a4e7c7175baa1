mod show_colored_diff_when_forced;
mod show_diff_chunks_for_modified_file;
mod show_diff_for_appended_line;
mod show_diff_for_unreadable_file_fails;
mod show_diff_with_context_flag;
mod show_nothing_for_identical_files;
