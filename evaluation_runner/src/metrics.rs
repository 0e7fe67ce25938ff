
use std::collections::HashMap;


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

#[derive(Debug, Clone)]
pub struct EvaluationSummary {
    pub accuracy: f64,
    pub total: usize,
    // sorted union of true and predicted labels, parallel to per_class
    pub labels: Vec<String>,
    pub per_class: Vec<ClassMetrics>,
    pub macro_avg: ClassMetrics,
    pub weighted_avg: ClassMetrics,
}


fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}


pub fn summarize(y_true: &[String], y_pred: &[String]) -> EvaluationSummary {
    assert_eq!(y_true.len(), y_pred.len(), "prediction count must match truth count");

    let total = y_true.len();
    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();

    let mut labels: Vec<String> = y_true.iter().chain(y_pred).cloned().collect();
    labels.sort();
    labels.dedup();

    let mut per_class = Vec::with_capacity(labels.len());
    for label in &labels {
        let tp = y_true
            .iter()
            .zip(y_pred)
            .filter(|(t, p)| *t == label && *p == label)
            .count();
        let predicted = y_pred.iter().filter(|p| *p == label).count();
        let support = y_true.iter().filter(|t| *t == label).count();

        let precision = ratio(tp, predicted);
        let recall = ratio(tp, support);
        per_class.push(ClassMetrics {
            precision,
            recall,
            f1: f1_score(precision, recall),
            support,
        });
    }

    let class_count = per_class.len().max(1);
    let macro_avg = ClassMetrics {
        precision: per_class.iter().map(|m| m.precision).sum::<f64>() / class_count as f64,
        recall: per_class.iter().map(|m| m.recall).sum::<f64>() / class_count as f64,
        f1: per_class.iter().map(|m| m.f1).sum::<f64>() / class_count as f64,
        support: total,
    };

    let weight_base = total.max(1) as f64;
    let weighted_avg = ClassMetrics {
        precision: per_class.iter().map(|m| m.precision * m.support as f64).sum::<f64>() / weight_base,
        recall: per_class.iter().map(|m| m.recall * m.support as f64).sum::<f64>() / weight_base,
        f1: per_class.iter().map(|m| m.f1 * m.support as f64).sum::<f64>() / weight_base,
        support: total,
    };

    EvaluationSummary {
        accuracy: ratio(correct, total),
        total,
        labels,
        per_class,
        macro_avg,
        weighted_avg,
    }
}

// rows: true label, columns: predicted label, in the supplied order
pub fn confusion_matrix(y_true: &[String], y_pred: &[String], labels: &[String]) -> Vec<Vec<usize>> {
    let index: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(position, label)| (label.as_str(), position))
        .collect();

    let mut matrix = vec![vec![0usize; labels.len()]; labels.len()];
    for (t, p) in y_true.iter().zip(y_pred) {
        let (Some(&row), Some(&column)) = (index.get(t.as_str()), index.get(p.as_str())) else {
            continue;
        };
        matrix[row][column] += 1;
    }

    matrix
}
