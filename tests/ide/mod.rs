mod tests_symbols;
