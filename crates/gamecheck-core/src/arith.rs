/// One lexeme of the restricted expression grammar
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(char),
}

/// Evaluate a restricted arithmetic expression: operands joined by
/// `+ - * /`, applied strictly left to right with no precedence.
///
/// The grammar covers the quick-math puzzles: `7 * 8`, `3+4-2`,
/// `12 / 4 * 3`. Tokenizing is explicit; nothing is handed to a
/// general-purpose interpreter. Unparseable tokens, dangling
/// operators, and division by zero all yield `None`, never a panic.
pub fn eval(expression: &str) -> Option<f64> {
    let tokens = tokenize(expression)?;

    let mut iter = tokens.into_iter();
    let mut value = match iter.next()? {
        Token::Number(n) => n,
        Token::Op(_) => return None,
    };

    loop {
        let op = match iter.next() {
            None => return Some(value),
            Some(Token::Op(op)) => op,
            Some(Token::Number(_)) => return None,
        };
        let rhs = match iter.next() {
            Some(Token::Number(n)) => n,
            _ => return None,
        };
        value = match op {
            '+' => value + rhs,
            '-' => value - rhs,
            '*' => value * rhs,
            '/' => {
                if rhs == 0.0 {
                    return None;
                }
                value / rhs
            }
            _ => return None,
        };
    }
}

fn tokenize(expression: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expression.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit()
            || c == '.'
            // A minus where an operand is expected signs the number
            || (c == '-' && !matches!(tokens.last(), Some(Token::Number(_))))
        {
            let mut buf = String::new();
            buf.push(c);
            chars.next();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() || d == '.' {
                    buf.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token::Number(buf.parse().ok()?));
        } else if matches!(c, '+' | '-' | '*' | '/') {
            tokens.push(Token::Op(c));
            chars.next();
        } else {
            return None;
        }
    }

    if tokens.is_empty() {
        return None;
    }
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_operation() {
        assert_eq!(eval("7 * 8"), Some(56.0));
        assert_eq!(eval("10 - 4"), Some(6.0));
    }

    #[test]
    fn test_left_to_right_no_precedence() {
        // 2 + 3, then * 4
        assert_eq!(eval("2 + 3 * 4"), Some(20.0));
        assert_eq!(eval("12 / 4 * 3"), Some(9.0));
    }

    #[test]
    fn test_no_whitespace() {
        assert_eq!(eval("3+4-2"), Some(5.0));
    }

    #[test]
    fn test_negative_operand() {
        assert_eq!(eval("-3 + 5"), Some(2.0));
        assert_eq!(eval("6 * -2"), Some(-12.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("5 / 0"), None);
        assert_eq!(eval("3 + 2 / 0"), None);
    }

    #[test]
    fn test_fractional_result() {
        assert_eq!(eval("7 / 2"), Some(3.5));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(eval(""), None);
        assert_eq!(eval("   "), None);
        assert_eq!(eval("abc"), None);
        assert_eq!(eval("3 +"), None);
        assert_eq!(eval("+ 3"), None);
        assert_eq!(eval("3 4"), None);
        assert_eq!(eval("3 ** 4"), None);
        assert_eq!(eval("1.2.3"), None);
    }
}
